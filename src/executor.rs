//! Purchase executor
//!
//! Builds, signs and submits the buy: a fixed-value
//! `swapExactETHForTokens` through the router, with the configured
//! slippage tolerance wired into the minimum output. Fire-and-forget: a
//! returned hash does not guarantee inclusion.
//!
//! The nonce is fetched immediately before building; this assumes the bot
//! is the only agent issuing transactions from this wallet. Gas price and
//! limit are static configuration, not estimated.

use alloy::consensus::{SignableTransaction, TxEnvelope, TxLegacy};
use alloy::eips::eip2718::Encodable2718;
use alloy::network::TxSignerSync;
use alloy::signers::local::PrivateKeySigner;
use alloy_primitives::{Address, TxKind, B256, U256};
use alloy_sol_types::SolCall;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

use crate::abi;
use crate::config::SniperConfig;
use crate::error::ExecutionError;
use crate::gateway::ChainGateway;

const BPS_DENOMINATOR: u64 = 10_000;

pub struct PurchaseExecutor<G> {
    gateway: Arc<G>,
    signer: PrivateKeySigner,
    wallet: Address,
    chain_id: u64,
    router: Address,
    weth: Address,
    buy_amount_wei: U256,
    gas_price_wei: u128,
    gas_limit: u64,
    slippage_bps: u64,
    deadline_secs: u64,
}

impl<G: ChainGateway> PurchaseExecutor<G> {
    pub fn new(gateway: Arc<G>, signer: PrivateKeySigner, cfg: &SniperConfig) -> Self {
        let wallet = signer.address();
        Self {
            gateway,
            signer,
            wallet,
            chain_id: cfg.chain_id,
            router: cfg.router,
            weth: cfg.weth,
            buy_amount_wei: cfg.buy_amount_wei,
            gas_price_wei: cfg.gas_price_wei,
            gas_limit: cfg.gas_limit,
            slippage_bps: cfg.slippage_bps,
            deadline_secs: cfg.deadline_secs,
        }
    }

    pub fn wallet(&self) -> Address {
        self.wallet
    }

    /// Buy `token` with the configured ETH amount. Returns the submitted
    /// transaction hash.
    pub async fn execute(&self, token: Address) -> Result<B256, ExecutionError> {
        // fetched last-moment to avoid collisions with in-flight txs
        let nonce = self
            .gateway
            .transaction_count(self.wallet)
            .await
            .map_err(ExecutionError::Nonce)?;

        let path = vec![self.weth, token];
        let min_out = self.quoted_min_out(path.clone()).await?;
        debug!("min_out for {token}: {min_out}");

        let deadline = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
            + self.deadline_secs;

        let input = abi::swapExactETHForTokensCall {
            amountOutMin: min_out,
            path,
            to: self.wallet,
            deadline: U256::from(deadline),
        }
        .abi_encode();

        let mut tx = TxLegacy {
            chain_id: Some(self.chain_id),
            nonce,
            gas_price: self.gas_price_wei,
            gas_limit: self.gas_limit,
            to: TxKind::Call(self.router),
            value: self.buy_amount_wei,
            input: input.into(),
        };
        let signature = self.signer.sign_transaction_sync(&mut tx)?;
        let raw = TxEnvelope::Legacy(tx.into_signed(signature)).encoded_2718();

        self.gateway
            .submit_raw_transaction(raw.into())
            .await
            .map_err(ExecutionError::Submit)
    }

    /// Quote the swap and apply the slippage tolerance as the on-chain
    /// minimum-output floor.
    async fn quoted_min_out(&self, path: Vec<Address>) -> Result<U256, ExecutionError> {
        let data = abi::getAmountsOutCall {
            amountIn: self.buy_amount_wei,
            path,
        }
        .abi_encode();
        let raw = self
            .gateway
            .call(self.router, data.into(), None)
            .await
            .map_err(|e| ExecutionError::Quote(e.to_string()))?;
        let quoted = abi::getAmountsOutCall::abi_decode_returns(&raw, false)
            .map_err(|e| ExecutionError::Quote(e.to_string()))?
            .amounts
            .last()
            .copied()
            .ok_or_else(|| ExecutionError::Quote("empty amounts".to_string()))?;

        let keep_bps = BPS_DENOMINATOR.saturating_sub(self.slippage_bps);
        Ok(quoted * U256::from(keep_bps) / U256::from(BPS_DENOMINATOR))
    }
}
