//! Error taxonomy
//!
//! Failures are tagged per operation so the monitor can tell a recoverable
//! cycle failure from a candidate-scoped one:
//! - `CycleError`: height/log/decode failures, cycle-scoped, feed backoff
//! - `ExecutionError`: buy build/sign/submit failures, candidate-scoped
//! - evaluation errors never surface here: any failing safety check is a
//!   FAIL verdict, not an error (absence of proof of safety is the safe
//!   default)
//! Startup failures (missing config, unreachable endpoint) propagate as
//! `eyre::Report` out of `main`.

use thiserror::Error;

/// Failure talking to the chain endpoint.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("rpc transport: {0}")]
    Transport(String),
    #[error("call reverted: {0}")]
    Revert(String),
}

/// A log that does not match the expected `PairCreated` shape.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("log has {0} topics, expected 3")]
    MissingTopics(usize),
    #[error("log payload too short: {0} bytes")]
    ShortData(usize),
}

/// Cycle-scoped failure: logged, backed off, loop continues.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error("height query failed: {0}")]
    Height(#[source] GatewayError),
    #[error("log query failed: {0}")]
    LogQuery(#[source] GatewayError),
    #[error("log decode failed: {0}")]
    Decode(#[from] DecodeError),
}

/// Candidate-scoped failure: the purchase is abandoned, no retry.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("nonce fetch failed: {0}")]
    Nonce(#[source] GatewayError),
    #[error("swap quote failed: {0}")]
    Quote(String),
    #[error("signing failed: {0}")]
    Sign(#[from] alloy::signers::Error),
    #[error("submission failed: {0}")]
    Submit(#[source] GatewayError),
}
