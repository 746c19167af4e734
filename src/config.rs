//! Configuration
//!
//! One explicit struct built at startup and passed by reference into the
//! pipeline. Endpoint and private key are required; contract addresses and
//! tuning knobs have Ethereum mainnet defaults overridable via env.

use alloy_primitives::{Address, U256};
use eyre::{eyre, Result, WrapErr};
use std::str::FromStr;
use std::time::Duration;

use crate::types::eth_to_wei;

// Ethereum mainnet defaults (Uniswap V2)
const DEFAULT_FACTORY: &str = "0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f";
const DEFAULT_ROUTER: &str = "0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D";
const DEFAULT_WETH: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";

/// Configuration for the pair sniper.
#[derive(Debug, Clone)]
pub struct SniperConfig {
    /// HTTP RPC URL for the Ethereum node
    pub http_url: String,
    /// Hex-encoded private key of the buying wallet
    pub private_key: String,
    /// Chain ID used when signing
    pub chain_id: u64,
    /// Uniswap V2 factory emitting PairCreated
    pub factory: Address,
    /// Uniswap V2 router used for the buy
    pub router: Address,
    /// Wrapped native token (base side of every candidate pair)
    pub weth: Address,
    /// Fixed native-currency amount spent per buy, in wei
    pub buy_amount_wei: U256,
    /// Static gas price, in wei
    pub gas_price_wei: u128,
    /// Static gas limit
    pub gas_limit: u64,
    /// Minimum native balance the pair must hold, in wei
    pub min_liquidity_wei: U256,
    /// Slippage tolerance applied to the quoted output (basis points)
    pub slippage_bps: u64,
    /// Wait between the two height reads of a cycle
    pub poll_interval: Duration,
    /// Backoff floor, seconds
    pub backoff_min_secs: u64,
    /// Backoff cap, seconds
    pub backoff_max_secs: u64,
    /// Backoff growth per failed cycle, seconds
    pub backoff_step_secs: u64,
    /// Swap deadline window, seconds from now
    pub deadline_secs: u64,
}

impl SniperConfig {
    /// Load from environment. Missing endpoint or key is a fatal startup
    /// error; everything else falls back to mainnet defaults.
    pub fn from_env() -> Result<Self> {
        let http_url = std::env::var("ETH_HTTP_URL")
            .map_err(|_| eyre!("ETH_HTTP_URL not set (e.g. https://mainnet.infura.io/v3/KEY)"))?;
        let private_key =
            std::env::var("PRIVATE_KEY").map_err(|_| eyre!("PRIVATE_KEY not set"))?;

        Ok(Self {
            http_url,
            private_key,
            chain_id: env_parse("CHAIN_ID", 1u64)?,
            factory: env_address("FACTORY_ADDRESS", DEFAULT_FACTORY)?,
            router: env_address("ROUTER_ADDRESS", DEFAULT_ROUTER)?,
            weth: env_address("WETH_ADDRESS", DEFAULT_WETH)?,
            buy_amount_wei: eth_to_wei(env_parse("BUY_AMOUNT_ETH", 0.05f64)?),
            gas_price_wei: env_parse("GAS_PRICE_GWEI", 100u128)? * 1_000_000_000,
            gas_limit: env_parse("GAS_LIMIT", 300_000u64)?,
            min_liquidity_wei: eth_to_wei(env_parse("MIN_LIQUIDITY_ETH", 1.0f64)?),
            slippage_bps: env_parse("SLIPPAGE_BPS", 3_000u64)?,
            poll_interval: Duration::from_secs(env_parse("POLL_INTERVAL_SECS", 3u64)?),
            backoff_min_secs: env_parse("BACKOFF_MIN_SECS", 5u64)?,
            backoff_max_secs: env_parse("BACKOFF_MAX_SECS", 30u64)?,
            backoff_step_secs: env_parse("BACKOFF_STEP_SECS", 5u64)?,
            deadline_secs: env_parse("SWAP_DEADLINE_SECS", 60u64)?,
        })
    }
}

fn env_parse<T: FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .wrap_err_with(|| format!("invalid {key}: {raw:?}")),
        Err(_) => Ok(default),
    }
}

fn env_address(key: &str, default: &str) -> Result<Address> {
    let raw = std::env::var(key).unwrap_or_else(|_| default.to_string());
    Address::from_str(raw.trim()).wrap_err_with(|| format!("invalid {key}: {raw:?}"))
}
