//! Shared data types for the sniping pipeline

use alloy_primitives::{Address, Bytes, B256, U256};
use std::time::Duration;

/// One raw log record as returned by the log range query.
///
/// Kept deliberately minimal so the mock gateway can fabricate logs without
/// dragging in the full RPC log shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLog {
    /// Log topics (topic0 = event signature hash)
    pub topics: Vec<B256>,
    /// Non-indexed payload
    pub data: Bytes,
    /// Block the log was emitted in
    pub block_number: u64,
}

/// A decoded factory `PairCreated` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairCreatedEvent {
    pub token0: Address,
    pub token1: Address,
    /// Address of the newly deployed pair contract
    pub pair: Address,
    pub block_number: u64,
}

impl PairCreatedEvent {
    /// The non-base side of the pair, if one side is the base token.
    /// Returns `None` when neither side matches (pair is discarded).
    pub fn counterpart(&self, base: Address) -> Option<Address> {
        if self.token0 == base {
            Some(self.token1)
        } else if self.token1 == base {
            Some(self.token0)
        } else {
            None
        }
    }
}

/// Verdict of the token safety evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    pub pass: bool,
    /// Populated on FAIL with the failing check
    pub reason: Option<String>,
}

impl EvaluationResult {
    pub fn pass() -> Self {
        Self {
            pass: true,
            reason: None,
        }
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        Self {
            pass: false,
            reason: Some(reason.into()),
        }
    }
}

/// Last block the poll loop has fully scanned.
///
/// Owned exclusively by the monitor; only advances, and the next cycle's
/// lower bound is always `last_scanned + 1`, so a block range is never
/// processed twice.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanCursor {
    pub last_scanned: Option<u64>,
}

/// Capped linear-growth retry delay.
///
/// Invariant: `min <= current <= max`. Reset to `min` after any fully
/// successful cycle; grown by `step` (capped at `max`) after a failed one.
#[derive(Debug, Clone, Copy)]
pub struct BackoffState {
    current_secs: u64,
    min_secs: u64,
    max_secs: u64,
    step_secs: u64,
}

impl BackoffState {
    pub fn new(min_secs: u64, max_secs: u64, step_secs: u64) -> Self {
        Self {
            current_secs: min_secs,
            min_secs,
            max_secs,
            step_secs,
        }
    }

    /// Current delay to sleep before the next attempt.
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.current_secs)
    }

    /// Record a failed cycle: returns the delay to sleep now, then grows
    /// the delay for the next failure.
    pub fn on_failure(&mut self) -> Duration {
        let delay = self.delay();
        self.current_secs = (self.current_secs + self.step_secs).min(self.max_secs);
        delay
    }

    /// Record a fully successful cycle.
    pub fn reset(&mut self) {
        self.current_secs = self.min_secs;
    }

    pub fn current_secs(&self) -> u64 {
        self.current_secs
    }
}

/// Convert a whole-unit ETH amount to wei.
pub fn eth_to_wei(eth: f64) -> U256 {
    U256::from((eth * 1e18) as u128)
}

/// Convert wei to whole-unit ETH for display and threshold checks.
pub fn wei_to_eth(wei: U256) -> f64 {
    u128::try_from(wei).map(|v| v as f64 / 1e18).unwrap_or(f64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const WETH: Address = address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
    const TKN: Address = address!("1000000000000000000000000000000000000001");

    #[test]
    fn counterpart_picks_non_base_side() {
        let event = PairCreatedEvent {
            token0: WETH,
            token1: TKN,
            pair: Address::ZERO,
            block_number: 1,
        };
        assert_eq!(event.counterpart(WETH), Some(TKN));

        let flipped = PairCreatedEvent {
            token0: TKN,
            token1: WETH,
            ..event
        };
        assert_eq!(flipped.counterpart(WETH), Some(TKN));
    }

    #[test]
    fn counterpart_rejects_non_base_pairs() {
        let event = PairCreatedEvent {
            token0: TKN,
            token1: address!("2000000000000000000000000000000000000002"),
            pair: Address::ZERO,
            block_number: 1,
        };
        assert_eq!(event.counterpart(WETH), None);
    }

    #[test]
    fn backoff_grows_by_step_and_caps() {
        let mut backoff = BackoffState::new(5, 30, 5);
        // N consecutive failures: delay slept = min + (N-1)*step, capped
        let slept: Vec<u64> = (0..8).map(|_| backoff.on_failure().as_secs()).collect();
        assert_eq!(slept, vec![5, 10, 15, 20, 25, 30, 30, 30]);
        assert_eq!(backoff.current_secs(), 30);
    }

    #[test]
    fn backoff_resets_on_success() {
        let mut backoff = BackoffState::new(5, 30, 5);
        backoff.on_failure();
        backoff.on_failure();
        assert_eq!(backoff.current_secs(), 15);
        backoff.reset();
        assert_eq!(backoff.current_secs(), 5);
        assert_eq!(backoff.delay(), Duration::from_secs(5));
    }

    #[test]
    fn wei_conversions_roundtrip_whole_units() {
        assert_eq!(eth_to_wei(1.0), U256::from(1_000_000_000_000_000_000u128));
        assert_eq!(wei_to_eth(U256::from(200_000_000_000_000_000u128)), 0.2);
    }
}
