//! Pair Sniper - Uniswap V2 new-pair buying agent
//!
//! Polls the factory for PairCreated events, screens each new WETH-paired
//! token (metadata, liquidity, transfer probe) and buys passers with a
//! fixed ETH amount. Heuristic screening, not a proof of safety.

use alloy::signers::local::PrivateKeySigner;
use eyre::{Result, WrapErr};
use pair_sniper::{ChainGateway, PairMonitor, RpcGateway, SniperConfig};
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    println!(
        r#"
    ╔══════════════════════════════════════╗
    ║       P A I R   S N I P E R          ║
    ║   Uniswap V2 new-pair buy agent      ║
    ╚══════════════════════════════════════╝
    "#
    );

    // Startup failures below are fatal: bad config or an unreachable
    // endpoint exits nonzero before the loop starts.
    let config = SniperConfig::from_env()?;
    let signer: PrivateKeySigner = config
        .private_key
        .trim_start_matches("0x")
        .parse()
        .wrap_err("invalid PRIVATE_KEY")?;
    info!("🔑 Wallet: {}", signer.address());

    let gateway = Arc::new(RpcGateway::connect(&config.http_url)?);
    let head = gateway
        .block_number()
        .await
        .wrap_err("node unreachable at startup")?;
    info!("📡 Connected. Chain head: {head}");

    let mut monitor = PairMonitor::new(gateway, signer, &config);

    tokio::select! {
        result = monitor.run() => result,
        _ = tokio::signal::ctrl_c() => {
            info!("🛑 Shutting down gracefully...");
            Ok(())
        }
    }
}
