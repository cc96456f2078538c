//! Agora daemon — entry point for running an Agora node.

use agora_node::{AgoraNode, NodeConfig};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "agora-daemon", about = "Agora club election node daemon")]
struct Cli {
    /// Data directory for the store snapshot.
    #[arg(long, env = "AGORA_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Port for the HTTP API.
    #[arg(long, env = "AGORA_API_PORT")]
    api_port: Option<u16>,

    /// Disable the periodic election status sweep.
    #[arg(long, env = "AGORA_DISABLE_SWEEP")]
    disable_sweep: bool,

    /// Seconds between status sweep passes.
    #[arg(long, env = "AGORA_SWEEP_INTERVAL")]
    sweep_interval_secs: Option<u64>,

    /// Seed an admin account and sample catalog into an empty store.
    #[arg(long, env = "AGORA_SEED_SAMPLE_DATA")]
    seed_sample_data: bool,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "info", env = "AGORA_LOG_LEVEL")]
    log_level: String,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    agora_utils::init_tracing();

    let cli = Cli::parse();

    let base = if let Some(ref path) = cli.config {
        match NodeConfig::from_toml_file(&path.to_string_lossy()) {
            Ok(cfg) => {
                tracing::info!("Loaded config from {}", path.display());
                cfg
            }
            Err(e) => {
                tracing::warn!("Failed to load config file: {e}, using defaults");
                NodeConfig::default()
            }
        }
    } else {
        NodeConfig::default()
    };

    let config = NodeConfig {
        data_dir: cli.data_dir.unwrap_or(base.data_dir),
        api_port: cli.api_port.unwrap_or(base.api_port),
        enable_sweep: base.enable_sweep && !cli.disable_sweep,
        sweep_interval_secs: cli.sweep_interval_secs.unwrap_or(base.sweep_interval_secs),
        seed_sample_data: cli.seed_sample_data || base.seed_sample_data,
        log_level: cli.log_level,
    };

    tracing::info!(
        "Starting Agora node (API:{}, sweep:{})",
        config.api_port,
        if config.enable_sweep {
            format!("every {}s", config.sweep_interval_secs)
        } else {
            "off".into()
        },
    );

    let mut node = AgoraNode::new(config)?;
    node.start();

    tokio::select! {
        result = node.serve() => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received — stopping node");
        }
    }

    node.stop()?;
    tracing::info!("Agora daemon exited cleanly");

    Ok(())
}
