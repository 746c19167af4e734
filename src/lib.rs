//! Pair Sniper Library
//!
//! Watches a Uniswap V2 factory for newly created pairs, screens each new
//! WETH-paired token with three safety heuristics (metadata readability,
//! minimum pool liquidity, transfer probe) and submits a fixed-amount buy
//! for tokens that pass. Monitor -> verify -> act, with capped exponential
//! backoff on cycle failures.
//!
//! The safety checks are a best-effort heuristic, not a proof of safety.

pub mod abi;
pub mod config;
pub mod decoder;
pub mod error;
pub mod executor;
pub mod gateway;
pub mod monitor;
pub mod safety;
pub mod types;

pub use config::SniperConfig;
pub use decoder::{decode_pair_created, PAIR_CREATED_TOPIC};
pub use error::{CycleError, DecodeError, ExecutionError, GatewayError};
pub use executor::PurchaseExecutor;
pub use gateway::{ChainGateway, RpcGateway};
pub use monitor::PairMonitor;
pub use safety::TokenSafetyEvaluator;
pub use types::{BackoffState, EvaluationResult, PairCreatedEvent, RawLog, ScanCursor};
