//! Chain gateway
//!
//! The one seam between the pipeline and the network. The monitor,
//! evaluator and executor only ever talk to this trait; production uses
//! the alloy HTTP provider, tests use an in-memory mock.

use alloy::transports::http::{Client, Http};
use alloy_primitives::{Address, Bytes, TxKind, B256, U256};
use alloy_provider::{Provider, ProviderBuilder};
use alloy_rpc_types::{Filter, TransactionInput, TransactionRequest};

use crate::error::GatewayError;
use crate::types::RawLog;

/// Read chain state and submit signed transactions.
#[allow(async_fn_in_trait)]
pub trait ChainGateway {
    /// Current chain height.
    async fn block_number(&self) -> Result<u64, GatewayError>;

    /// All logs for `address` with the given topic0 in `[from_block, to_block]`,
    /// in block-then-index order.
    async fn logs(
        &self,
        from_block: u64,
        to_block: u64,
        address: Address,
        topic0: B256,
    ) -> Result<Vec<RawLog>, GatewayError>;

    /// Native-currency balance of an account, in wei.
    async fn native_balance(&self, address: Address) -> Result<U256, GatewayError>;

    /// Transaction count (next nonce) of an account.
    async fn transaction_count(&self, address: Address) -> Result<u64, GatewayError>;

    /// Read-only call simulation. `from` matters for access-controlled
    /// paths like the transfer probe.
    async fn call(
        &self,
        to: Address,
        data: Bytes,
        from: Option<Address>,
    ) -> Result<Bytes, GatewayError>;

    /// Submit a signed raw transaction; returns the hash without waiting
    /// for inclusion.
    async fn submit_raw_transaction(&self, raw: Bytes) -> Result<B256, GatewayError>;
}

/// Production adapter over an alloy HTTP provider.
pub struct RpcGateway<P> {
    provider: P,
}

impl RpcGateway<()> {
    /// Connect to an HTTP endpoint.
    pub fn connect(url: &str) -> eyre::Result<RpcGateway<impl Provider<Http<Client>>>> {
        let url = url
            .parse()
            .map_err(|e| eyre::eyre!("invalid ETH_HTTP_URL: {e}"))?;
        let provider = ProviderBuilder::new().on_http(url);
        Ok(RpcGateway { provider })
    }
}

impl<P: Provider<Http<Client>>> RpcGateway<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

fn transport_err(e: impl std::fmt::Display) -> GatewayError {
    GatewayError::Transport(e.to_string())
}

impl<P: Provider<Http<Client>>> ChainGateway for RpcGateway<P> {
    async fn block_number(&self) -> Result<u64, GatewayError> {
        self.provider.get_block_number().await.map_err(transport_err)
    }

    async fn logs(
        &self,
        from_block: u64,
        to_block: u64,
        address: Address,
        topic0: B256,
    ) -> Result<Vec<RawLog>, GatewayError> {
        let filter = Filter::new()
            .from_block(from_block)
            .to_block(to_block)
            .address(address)
            .event_signature(topic0);
        let logs = self.provider.get_logs(&filter).await.map_err(transport_err)?;
        Ok(logs
            .into_iter()
            .map(|log| RawLog {
                topics: log.inner.data.topics().to_vec(),
                data: log.inner.data.data.clone(),
                block_number: log.block_number.unwrap_or(to_block),
            })
            .collect())
    }

    async fn native_balance(&self, address: Address) -> Result<U256, GatewayError> {
        self.provider.get_balance(address).await.map_err(transport_err)
    }

    async fn transaction_count(&self, address: Address) -> Result<u64, GatewayError> {
        self.provider
            .get_transaction_count(address)
            .await
            .map_err(transport_err)
    }

    async fn call(
        &self,
        to: Address,
        data: Bytes,
        from: Option<Address>,
    ) -> Result<Bytes, GatewayError> {
        let mut tx = TransactionRequest::default();
        tx.to = Some(TxKind::Call(to));
        tx.input = TransactionInput::new(data);
        tx.from = from;
        self.provider.call(&tx).await.map_err(|e| {
            // reverts come back as JSON-RPC error payloads
            match e.as_error_resp() {
                Some(payload) => GatewayError::Revert(payload.message.to_string()),
                None => transport_err(e),
            }
        })
    }

    async fn submit_raw_transaction(&self, raw: Bytes) -> Result<B256, GatewayError> {
        let pending = self
            .provider
            .send_raw_transaction(&raw)
            .await
            .map_err(transport_err)?;
        Ok(*pending.tx_hash())
    }
}
