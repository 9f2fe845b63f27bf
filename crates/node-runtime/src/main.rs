//! # BDNS Node Runtime
//!
//! Runs a devnet of in-process BDNS nodes.
//!
//! ## Startup Sequence
//!
//! 1. Install logging (`RUST_LOG`, default `info`)
//! 2. Load configuration (defaults, `BDNS_CONFIG` file, `BDNS_*` overrides)
//! 3. Anchor slot 0 at the current time unless configured
//! 4. Start the devnet and bootstrap genesis
//! 5. Spawn the block producers and a demo client registering names
//! 6. Run until Ctrl+C, then shut down

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use bd_01_name_index::IndexRecord;
use bd_04_peer_sync::PeerMessage;
use node_runtime::container::DevnetNode;
use node_runtime::handlers::producer::unix_now;
use node_runtime::{Devnet, NodeConfig};
use rand::Rng;
use shared_types::Transaction;
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Submit a registration to one random node, which relays it to its peers.
fn submit_demo_registration(nodes: &[Arc<DevnetNode>], tid: u64) -> String {
    let mut rng = rand::thread_rng();
    let node = &nodes[rng.gen_range(0..nodes.len())];
    let domain = format!("demo{tid}.bdns");
    let resolution = format!(
        "10.{}.{}.{}",
        rng.gen::<u8>(),
        rng.gen::<u8>(),
        rng.gen_range(1..255u8)
    );
    let tx = Transaction::register(tid, domain.clone(), resolution, [0u8; 32], unix_now());

    node.state.submit_transaction(tx.clone());
    node.transport.broadcast(&PeerMessage::Transaction(tx));
    domain
}

fn describe(record: Option<IndexRecord>) -> String {
    match record {
        Some(r) => format!("{} (block {})", r.resolution(), r.block_index),
        None => "unresolved".to_string(),
    }
}

/// Register a name every slot and report where the previous one landed.
async fn run_demo_client(
    nodes: Vec<Arc<DevnetNode>>,
    slot: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = tokio::time::interval(slot);
    let mut tid = 1_000u64;
    let mut last: Option<String> = None;
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Some(domain) = last.take() {
                    let observer = &nodes[nodes.len() - 1];
                    info!(
                        "[demo] {} -> {} (tip {:?}, digest {})",
                        domain,
                        describe(observer.state.resolve(&domain)),
                        observer.state.tip_height(),
                        hex::encode(&observer.state.index_digest()[..8])
                    );
                }
                last = Some(submit_demo_registration(&nodes, tid));
                tid += 1;
            }
            _ = shutdown.changed() => break,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    // Load configuration
    let mut config = NodeConfig::load().context("Failed to load configuration")?;
    if config.slots.initial_timestamp == 0 {
        config.slots.initial_timestamp = unix_now();
    }

    info!("===========================================");
    info!("  BDNS Devnet Runtime v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");

    let mut devnet = Devnet::start(config).context("Failed to start devnet")?;
    devnet.spawn_producers();

    let (demo_stop, demo_rx) = watch::channel(false);
    let slot = Duration::from_secs(devnet.config().slots.slot_interval_secs);
    let demo = tokio::spawn(run_demo_client(devnet.nodes().to_vec(), slot, demo_rx));

    info!("Devnet is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    demo_stop.send(true).ok();
    demo.await.ok();
    devnet.shutdown().await;
    Ok(())
}
