//! The running node — store, engines, sweep task, and HTTP API.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use agora_elections::LifecycleManager;
use agora_rpc::{ApiState, RpcServer};
use agora_sessions::SessionManager;
use agora_store::{ClubStore, NewClub, NewPosition, PositionStore, StoreError, UserStore};
use agora_store_memory::MemoryStore;
use agora_types::{RegNo, SiteRole, Timestamp};

use crate::config::NodeConfig;
use crate::error::NodeError;

/// Registration number of the seeded admin account.
pub const SEED_ADMIN_REG_NO: &str = "ADMIN";
/// Initial password of the seeded admin account. Change it after first login.
pub const SEED_ADMIN_PASSWORD: &str = "change-me";

/// A running Agora node.
pub struct AgoraNode {
    pub config: NodeConfig,
    pub store: Arc<MemoryStore>,
    pub state: Arc<ApiState<MemoryStore>>,
    sweep_handle: Option<JoinHandle<()>>,
}

impl AgoraNode {
    /// Build a node: restore the snapshot when one exists, otherwise start
    /// from an empty store, then seed sample data if configured.
    pub fn new(config: NodeConfig) -> Result<Self, NodeError> {
        let snapshot = config.snapshot_path();
        let store = match MemoryStore::load_snapshot(&snapshot) {
            Ok(store) => {
                info!(path = %snapshot.display(), "restored store snapshot");
                Arc::new(store)
            }
            Err(StoreError::NotFound(_)) => {
                info!(path = %snapshot.display(), "no snapshot, starting empty");
                Arc::new(MemoryStore::new())
            }
            Err(e) => return Err(e.into()),
        };

        let state = Arc::new(ApiState::new(store.clone()));
        let node = Self {
            config,
            store,
            state,
            sweep_handle: None,
        };
        if node.config.seed_sample_data && node.store.user_count()? == 0 {
            node.seed_sample_data()?;
        }
        Ok(node)
    }

    /// Seed an admin account plus a small club and position catalog.
    /// Only called on an empty store.
    fn seed_sample_data(&self) -> Result<(), NodeError> {
        let sessions = SessionManager::new(self.store.clone());
        let admin_reg = RegNo::from(SEED_ADMIN_REG_NO);
        let mut admin = sessions.register(&admin_reg, "Site Admin", SEED_ADMIN_PASSWORD)?;
        admin.role = SiteRole::Admin;
        self.store.put_user(&admin)?;
        warn!(reg_no = %admin_reg, "seeded admin account with the default password");

        for name in ["President", "Vice President", "General Secretary", "Treasurer"] {
            self.store.insert_position(&NewPosition { name: name.into() })?;
        }

        let clubs = [
            ("Chess Club", "Strategy board games and tournaments", "games"),
            ("Robotics Society", "Build and program robots", "technical"),
            ("Drama Club", "Stage productions and improv", "cultural"),
            ("Literary Society", "Debates, readings, and the annual magazine", "cultural"),
        ];
        for (name, description, category) in clubs {
            self.store.insert_club(&NewClub {
                name: name.into(),
                description: description.into(),
                category: category.into(),
                head: admin_reg.clone(),
            })?;
        }
        info!("seeded sample catalog");
        Ok(())
    }

    /// Spawn the periodic status sweep, if enabled.
    pub fn start(&mut self) {
        if !self.config.enable_sweep {
            info!("status sweep disabled");
            return;
        }
        let interval = Duration::from_secs(self.config.sweep_interval_secs.max(1));
        let elections = LifecycleManager::new(self.store.clone());
        self.sweep_handle = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                match elections.sweep(Timestamp::now()) {
                    Ok(applied) => {
                        for t in &applied {
                            info!(
                                election = %t.election,
                                from = %t.from,
                                to = %t.to,
                                "sweep advanced election"
                            );
                        }
                    }
                    Err(e) => error!("status sweep failed: {e}"),
                }
            }
        }));
        info!(interval_secs = interval.as_secs(), "status sweep started");
    }

    /// Run the HTTP API. Blocks until the server stops.
    pub async fn serve(&self) -> Result<(), NodeError> {
        let server = RpcServer::new(self.config.api_port, self.state.clone());
        server.start().await?;
        Ok(())
    }

    /// Stop background work and persist the store snapshot.
    pub fn stop(&mut self) -> Result<(), NodeError> {
        if let Some(handle) = self.sweep_handle.take() {
            handle.abort();
        }
        std::fs::create_dir_all(&self.config.data_dir)?;
        let path = self.config.snapshot_path();
        self.store.save_snapshot(&path)?;
        info!(path = %path.display(), "store snapshot saved");
        Ok(())
    }
}
