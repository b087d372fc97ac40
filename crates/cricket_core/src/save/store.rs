//! Local persistence and remote sync seams.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::error::SaveError;
use super::format::{decompress_and_deserialize, serialize_and_compress, MatchSnapshotFile};
use crate::models::Match;

const FILE_EXTENSION: &str = "match";

/// Save and load by match id. Saving an id that already exists replaces it.
pub trait MatchStore {
    fn save(&mut self, m: &Match) -> Result<(), SaveError>;
    fn load(&self, match_id: &str) -> Result<Match, SaveError>;
    fn delete(&mut self, match_id: &str) -> Result<(), SaveError>;
    fn list_ids(&self) -> Result<Vec<String>, SaveError>;
}

/// Remote publication of history-free snapshots. Callers treat a failure as
/// something to log, never as a reason to refuse a scoring operation.
pub trait SyncSink {
    fn publish(&mut self, snapshot: &Match) -> Result<(), SaveError>;
}

/// Keeps the most recently saved matches, newest first.
#[derive(Debug, Clone)]
pub struct InMemoryMatchStore {
    matches: Vec<Match>,
    limit: usize,
}

impl InMemoryMatchStore {
    /// Keeps the `limit` most recently saved matches. At least one match is
    /// always kept, so a limit of zero behaves like one.
    pub fn new(limit: usize) -> Self {
        Self { matches: Vec::new(), limit: limit.max(1) }
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

impl MatchStore for InMemoryMatchStore {
    fn save(&mut self, m: &Match) -> Result<(), SaveError> {
        self.matches.retain(|existing| existing.id != m.id);
        self.matches.insert(0, m.clone());
        if self.matches.len() > self.limit {
            for evicted in self.matches.drain(self.limit..) {
                debug!(match_id = %evicted.id, "evicted from recent matches");
            }
        }
        Ok(())
    }

    fn load(&self, match_id: &str) -> Result<Match, SaveError> {
        self.matches
            .iter()
            .find(|m| m.id == match_id)
            .cloned()
            .ok_or_else(|| SaveError::NotFound { match_id: match_id.to_string() })
    }

    fn delete(&mut self, match_id: &str) -> Result<(), SaveError> {
        self.matches.retain(|m| m.id != match_id);
        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<String>, SaveError> {
        Ok(self.matches.iter().map(|m| m.id.clone()).collect())
    }
}

/// One compressed, checksummed file per match under `root`.
#[derive(Debug, Clone)]
pub struct FileMatchStore {
    root: PathBuf,
}

impl FileMatchStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, match_id: &str) -> Result<PathBuf, SaveError> {
        let valid = !match_id.is_empty()
            && match_id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(SaveError::InvalidMatchId { match_id: match_id.to_string() });
        }
        Ok(self.root.join(format!("{}.{}", match_id, FILE_EXTENSION)))
    }

    pub fn load_snapshot(&self, match_id: &str) -> Result<MatchSnapshotFile, SaveError> {
        let path = self.path_for(match_id)?;
        if !path.exists() {
            return Err(SaveError::NotFound { match_id: match_id.to_string() });
        }

        let mut data = Vec::new();
        File::open(&path)?.read_to_end(&mut data)?;
        let snapshot = decompress_and_deserialize(&data)?;

        debug!("Loaded {} bytes from {:?}", data.len(), path);
        Ok(snapshot)
    }
}

impl MatchStore for FileMatchStore {
    fn save(&mut self, m: &Match) -> Result<(), SaveError> {
        let path = self.path_for(&m.id)?;
        fs::create_dir_all(&self.root)?;

        let data = serialize_and_compress(&MatchSnapshotFile::new(m))?;

        // Atomic save: temp file, then rename
        let temp_path = path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&data)?;
            file.flush()?;
            file.sync_all()?;
        }
        fs::rename(&temp_path, &path)?;

        debug!("Saved {} bytes to {:?}", data.len(), path);
        Ok(())
    }

    fn load(&self, match_id: &str) -> Result<Match, SaveError> {
        Ok(self.load_snapshot(match_id)?.match_state)
    }

    fn delete(&mut self, match_id: &str) -> Result<(), SaveError> {
        let path = self.path_for(match_id)?;
        if path.exists() {
            fs::remove_file(&path)?;
            info!(match_id, "deleted saved match");
        }
        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<String>, SaveError> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(FILE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Scorer;
    use crate::models::{MatchSetup, TeamSetup};
    use tempfile::TempDir;

    fn fresh(name: &str) -> Match {
        let setup = MatchSetup::new(
            TeamSetup::numbered(name, "A", 2),
            TeamSetup::numbered("Visitors", "B", 2),
            1,
        );
        Scorer::default().create_match(&setup).unwrap()
    }

    #[test]
    fn test_in_memory_keeps_most_recent() {
        let mut store = InMemoryMatchStore::new(2);
        let (a, b, c) = (fresh("A"), fresh("B"), fresh("C"));
        for m in [&a, &b, &c] {
            store.save(m).unwrap();
        }
        assert_eq!(store.list_ids().unwrap(), vec![c.id.clone(), b.id.clone()]);
        assert!(matches!(store.load(&a.id), Err(SaveError::NotFound { .. })));

        store.save(&b).unwrap();
        assert_eq!(store.list_ids().unwrap(), vec![b.id.clone(), c.id.clone()]);

        store.delete(&c.id).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.load(&b.id).unwrap(), b);
    }

    #[test]
    fn test_in_memory_zero_limit_keeps_latest() {
        let mut store = InMemoryMatchStore::new(0);
        let (a, b) = (fresh("A"), fresh("B"));
        store.save(&a).unwrap();
        assert_eq!(store.load(&a.id).unwrap(), a);

        store.save(&b).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.list_ids().unwrap(), vec![b.id.clone()]);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store = FileMatchStore::new(dir.path().join("matches"));
        assert!(store.list_ids().unwrap().is_empty());

        let m = fresh("Home");
        store.save(&m).unwrap();
        assert_eq!(store.load(&m.id).unwrap(), m);
        assert_eq!(store.list_ids().unwrap(), vec![m.id.clone()]);
        assert!(!store.root().join(format!("{}.tmp", m.id)).exists());

        store.delete(&m.id).unwrap();
        assert!(matches!(store.load(&m.id), Err(SaveError::NotFound { .. })));
    }

    #[test]
    fn test_file_store_rejects_path_like_ids() {
        let dir = TempDir::new().unwrap();
        let store = FileMatchStore::new(dir.path());
        let err = store.load("../escape").unwrap_err();
        assert!(matches!(err, SaveError::InvalidMatchId { .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_file_store_detects_corruption() {
        let dir = TempDir::new().unwrap();
        let mut store = FileMatchStore::new(dir.path());
        let m = fresh("Home");
        store.save(&m).unwrap();

        let path = dir.path().join(format!("{}.match", m.id));
        let mut bytes = fs::read(&path).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0x01;
        fs::write(&path, bytes).unwrap();

        assert!(matches!(store.load(&m.id), Err(SaveError::ChecksumMismatch)));
    }
}
