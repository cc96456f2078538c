//! Node configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::NodeError;

/// Configuration for an Agora node.
///
/// Can be loaded from a TOML file via [`NodeConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Data directory for the store snapshot.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Port the HTTP API listens on.
    #[serde(default = "default_api_port")]
    pub api_port: u16,

    /// Whether the periodic status sweep runs.
    #[serde(default = "default_true")]
    pub enable_sweep: bool,

    /// Seconds between status sweep passes.
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,

    /// Seed an admin account and a sample catalog into an empty store.
    #[serde(default)]
    pub seed_sample_data: bool,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_data_dir() -> PathBuf {
    PathBuf::from("./agora_data")
}

fn default_api_port() -> u16 {
    7180
}

fn default_true() -> bool {
    true
}

fn default_sweep_interval_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl NodeConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, NodeError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| NodeError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, NodeError> {
        toml::from_str(s).map_err(|e| NodeError::Config(e.to_string()))
    }

    /// Where the store snapshot lives under the data directory.
    pub fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join("agora.snapshot")
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            api_port: default_api_port(),
            enable_sweep: default_true(),
            sweep_interval_secs: default_sweep_interval_secs(),
            seed_sample_data: false,
            log_level: default_log_level(),
        }
    }
}
