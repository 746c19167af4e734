//! Token safety evaluator
//!
//! Three read-only checks, short-circuiting in order:
//! 1. metadata: name()/symbol() must be readable
//! 2. liquidity: the pair must hold a minimum native balance
//! 3. transfer probe: a simulated 1-wei self-transfer must not revert
//!    (tokens that trade but block transfers are the classic honeypot)
//!
//! Any check erroring is a FAIL verdict, never a propagating error: the
//! absence of proof of safety is itself the safe default. Best-effort
//! heuristic, not a proof of safety.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use std::sync::Arc;
use tracing::info;

use crate::abi;
use crate::gateway::ChainGateway;
use crate::types::{wei_to_eth, EvaluationResult};

pub struct TokenSafetyEvaluator<G> {
    gateway: Arc<G>,
    /// Probe sender and recipient (the bot's own wallet)
    wallet: Address,
    min_liquidity_wei: U256,
}

impl<G: ChainGateway> TokenSafetyEvaluator<G> {
    pub fn new(gateway: Arc<G>, wallet: Address, min_liquidity_wei: U256) -> Self {
        Self {
            gateway,
            wallet,
            min_liquidity_wei,
        }
    }

    /// Evaluate one candidate token against its pool.
    pub async fn evaluate(&self, token: Address, pair: Address) -> EvaluationResult {
        // 1. metadata readability
        let name = self
            .read_return(token, abi::nameCall {}.abi_encode())
            .await
            .and_then(|raw| abi::nameCall::abi_decode_returns(&raw, false).ok())
            .map(|ret| ret._0);
        let symbol = self
            .read_return(token, abi::symbolCall {}.abi_encode())
            .await
            .and_then(|raw| abi::symbolCall::abi_decode_returns(&raw, false).ok())
            .map(|ret| ret._0);
        match (name, symbol) {
            (Some(name), Some(symbol)) => info!("ℹ️  Token: {name} ({symbol})"),
            _ => return EvaluationResult::fail("metadata unreadable"),
        }

        // 2. minimum pool liquidity
        let eth_in_pair = match self.gateway.native_balance(pair).await {
            Ok(balance) => wei_to_eth(balance),
            Err(_) => return EvaluationResult::fail("liquidity unreadable"),
        };
        info!("ℹ️  Pool liquidity: {eth_in_pair:.4} ETH");
        if eth_in_pair < wei_to_eth(self.min_liquidity_wei) {
            return EvaluationResult::fail("insufficient liquidity");
        }

        // 3. transfer probe (honeypot detection)
        let probe = abi::transferCall {
            to: self.wallet,
            amount: U256::from(1),
        }
        .abi_encode();
        if self
            .gateway
            .call(token, probe.into(), Some(self.wallet))
            .await
            .is_err()
        {
            return EvaluationResult::fail("honeypot suspected");
        }

        EvaluationResult::pass()
    }

    /// Raw eth_call return data; None on error or revert.
    async fn read_return(&self, token: Address, data: Vec<u8>) -> Option<Bytes> {
        self.gateway.call(token, data.into(), None).await.ok()
    }
}
