//! Poll loop controller
//!
//! Top-level state machine: tracks the scan cursor, pulls factory logs
//! once per cycle, dispatches decoded pairs to the evaluator and executor,
//! and owns the backoff policy. Height/log/decode failures are
//! cycle-scoped (logged, backed off, never fatal); evaluator and executor
//! failures are candidate-scoped so one bad pair never blocks the rest of
//! the batch.

use alloy::signers::local::PrivateKeySigner;
use alloy_primitives::Address;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::config::SniperConfig;
use crate::decoder::{decode_pair_created, PAIR_CREATED_TOPIC};
use crate::error::CycleError;
use crate::executor::PurchaseExecutor;
use crate::gateway::ChainGateway;
use crate::safety::TokenSafetyEvaluator;
use crate::types::{BackoffState, ScanCursor};

pub struct PairMonitor<G> {
    gateway: Arc<G>,
    evaluator: TokenSafetyEvaluator<G>,
    executor: PurchaseExecutor<G>,
    factory: Address,
    weth: Address,
    poll_interval: Duration,
    cursor: ScanCursor,
    backoff: BackoffState,
}

impl<G: ChainGateway> PairMonitor<G> {
    pub fn new(gateway: Arc<G>, signer: PrivateKeySigner, cfg: &SniperConfig) -> Self {
        let executor = PurchaseExecutor::new(gateway.clone(), signer, cfg);
        let evaluator =
            TokenSafetyEvaluator::new(gateway.clone(), executor.wallet(), cfg.min_liquidity_wei);
        Self {
            gateway,
            evaluator,
            executor,
            factory: cfg.factory,
            weth: cfg.weth,
            poll_interval: cfg.poll_interval,
            cursor: ScanCursor::default(),
            backoff: BackoffState::new(
                cfg.backoff_min_secs,
                cfg.backoff_max_secs,
                cfg.backoff_step_secs,
            ),
        }
    }

    pub fn cursor(&self) -> ScanCursor {
        self.cursor
    }

    /// Run cycles until cancelled. Recoverable failures back off and
    /// resume; the loop never terminates on its own.
    pub async fn run(&mut self) -> eyre::Result<()> {
        info!("🔎 Watching factory {} for new pairs...", self.factory);
        loop {
            match self.run_cycle().await {
                Ok(()) => self.backoff.reset(),
                Err(e) => {
                    error!("⚠️  Cycle failed: {e}");
                    let delay = self.backoff.on_failure();
                    info!("Retrying in {}s...", delay.as_secs());
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    /// One poll cycle. The cursor advances to the upper bound only after
    /// the whole cycle succeeds, so a failed range is rescanned and a
    /// scanned range never is.
    pub async fn run_cycle(&mut self) -> Result<(), CycleError> {
        let h_start = match self.cursor.last_scanned {
            Some(block) => block,
            None => {
                let head = self
                    .gateway
                    .block_number()
                    .await
                    .map_err(CycleError::Height)?;
                self.cursor.last_scanned = Some(head);
                head
            }
        };

        tokio::time::sleep(self.poll_interval).await;

        let h_end = self
            .gateway
            .block_number()
            .await
            .map_err(CycleError::Height)?;
        if h_end <= h_start {
            return Ok(());
        }

        let logs = self
            .gateway
            .logs(h_start + 1, h_end, self.factory, *PAIR_CREATED_TOPIC)
            .await
            .map_err(CycleError::LogQuery)?;

        // Decode the whole batch before dispatching any candidate: a buy is
        // irreversible, so a malformed log later in the range must abort the
        // cycle before the first submission, not after it. The failed range
        // is then rescanned without having bought anything.
        let mut events = Vec::with_capacity(logs.len());
        for log in &logs {
            events.push(decode_pair_created(log)?);
        }

        // ascending log order as returned by the range query
        for event in events {
            let Some(token) = event.counterpart(self.weth) else {
                debug!("pair {} has no WETH side; skipping", event.pair);
                continue;
            };
            info!(
                "🆕 New WETH pair: token {token} | pair {} (block {})",
                event.pair, event.block_number
            );

            let verdict = self.evaluator.evaluate(token, event.pair).await;
            if !verdict.pass {
                info!(
                    "⛔ Rejected {token}: {}",
                    verdict.reason.as_deref().unwrap_or("unknown")
                );
                continue;
            }

            info!("✅ {token} passed safety checks; buying");
            match self.executor.execute(token).await {
                Ok(hash) => info!("🚀 Buy submitted: https://etherscan.io/tx/{hash}"),
                Err(e) => warn!("❌ Buy failed for {token}: {e}"),
            }
        }

        self.cursor.last_scanned = Some(h_end);
        Ok(())
    }
}
