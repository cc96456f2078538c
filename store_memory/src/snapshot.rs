//! Snapshot persistence — serialize all tables to a versioned bincode file.
//!
//! The daemon saves a snapshot on shutdown and loads it on the next start,
//! so the in-memory backend survives restarts without a database engine.

use crate::tables::Tables;
use crate::MemoryStore;
use agora_store::StoreError;
use std::path::Path;
use std::sync::RwLock;
use tracing::info;

/// Bumped whenever the table layout changes incompatibly.
pub const SNAPSHOT_VERSION: u32 = 1;

impl MemoryStore {
    /// Write the current state to `path`.
    pub fn save_snapshot(&self, path: &Path) -> Result<(), StoreError> {
        let tables = self.read()?;
        let bytes = bincode::serialize(&(SNAPSHOT_VERSION, &*tables))
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        drop(tables);

        // Write to a sibling temp file first so a partial write never
        // clobbers the previous snapshot.
        let tmp = path.with_extension("tmp");
        std::fs::write(&tmp, &bytes).map_err(|e| StoreError::Backend(e.to_string()))?;
        std::fs::rename(&tmp, path).map_err(|e| StoreError::Backend(e.to_string()))?;
        info!(path = %path.display(), bytes = bytes.len(), "saved store snapshot");
        Ok(())
    }

    /// Load a store from a snapshot file written by [`save_snapshot`].
    ///
    /// [`save_snapshot`]: MemoryStore::save_snapshot
    pub fn load_snapshot(path: &Path) -> Result<Self, StoreError> {
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                StoreError::NotFound(format!("snapshot {}", path.display()))
            }
            _ => StoreError::Backend(e.to_string()),
        })?;
        let (version, tables): (u32, Tables) = bincode::deserialize(&bytes)
            .map_err(|e| StoreError::Corruption(e.to_string()))?;
        if version != SNAPSHOT_VERSION {
            return Err(StoreError::Corruption(format!(
                "snapshot version {version}, expected {SNAPSHOT_VERSION}"
            )));
        }
        info!(path = %path.display(), "loaded store snapshot");
        Ok(Self {
            inner: RwLock::new(tables),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_store::{NewClub, ClubStore, UserStore, UserRecord, VoteRecord, VoteStore};
    use agora_types::{ElectionId, RegNo, SiteRole, Timestamp};

    #[test]
    fn snapshot_roundtrip_preserves_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agora.snapshot");

        let store = MemoryStore::new();
        store
            .put_user(&UserRecord {
                reg_no: RegNo::from("R1"),
                name: "Someone".to_string(),
                password_hash: "$argon2id$x".to_string(),
                role: SiteRole::Admin,
            })
            .unwrap();
        let club = store
            .insert_club(&NewClub {
                name: "Chess".to_string(),
                description: String::new(),
                category: "Games".to_string(),
                head: RegNo::from("R1"),
            })
            .unwrap();
        store
            .insert_vote(&VoteRecord {
                voter: RegNo::from("R1"),
                election: ElectionId::new(3),
                cast_at: Timestamp::new(9),
            })
            .unwrap();

        store.save_snapshot(&path).unwrap();
        let restored = MemoryStore::load_snapshot(&path).unwrap();

        assert!(restored.user_exists(&RegNo::from("R1")).unwrap());
        assert_eq!(restored.get_club(club.id).unwrap().name, "Chess");
        assert!(restored
            .has_vote(&RegNo::from("R1"), ElectionId::new(3))
            .unwrap());
        // Id allocation continues past restored records.
        let next = restored
            .insert_club(&NewClub {
                name: "Music".to_string(),
                description: String::new(),
                category: "Arts".to_string(),
                head: RegNo::from("R1"),
            })
            .unwrap();
        assert!(next.id > club.id);
    }

    #[test]
    fn missing_snapshot_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = MemoryStore::load_snapshot(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
