use chrono::Utc;
use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use rmp_serde::{from_slice, to_vec_named};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::error::SaveError;
use super::SNAPSHOT_VERSION;
use crate::models::Match;

const CHECKSUM_LEN: usize = 32;

/// On-disk envelope around one match. The local copy keeps its undo history.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MatchSnapshotFile {
    pub version: u32,
    /// Unix milliseconds.
    pub saved_at: i64,
    pub match_state: Match,
}

impl MatchSnapshotFile {
    pub fn new(m: &Match) -> Self {
        Self { version: SNAPSHOT_VERSION, saved_at: current_timestamp(), match_state: m.clone() }
    }

    pub fn validate(&self) -> Result<(), SaveError> {
        let m = &self.match_state;
        if m.id.is_empty() || !m.ball_count_consistent() {
            return Err(SaveError::Corrupted);
        }
        Ok(())
    }
}

/// MessagePack, LZ4 with the size prepended, SHA-256 of the compressed bytes
/// appended.
pub fn serialize_and_compress(snapshot: &MatchSnapshotFile) -> Result<Vec<u8>, SaveError> {
    snapshot.validate()?;

    let msgpack = to_vec_named(snapshot)?;
    let mut bytes = compress_prepend_size(&msgpack);
    let checksum = Sha256::digest(&bytes);
    bytes.extend_from_slice(&checksum);
    Ok(bytes)
}

pub fn decompress_and_deserialize(bytes: &[u8]) -> Result<MatchSnapshotFile, SaveError> {
    if bytes.len() < 4 + CHECKSUM_LEN {
        return Err(SaveError::Corrupted);
    }

    let (payload, checksum) = bytes.split_at(bytes.len() - CHECKSUM_LEN);
    if Sha256::digest(payload).as_slice() != checksum {
        return Err(SaveError::ChecksumMismatch);
    }

    let msgpack = decompress_size_prepended(payload).map_err(|_| SaveError::Decompression)?;
    let snapshot: MatchSnapshotFile = from_slice(&msgpack)?;

    if snapshot.version != SNAPSHOT_VERSION {
        return Err(SaveError::VersionMismatch {
            found: snapshot.version,
            expected: SNAPSHOT_VERSION,
        });
    }
    snapshot.validate()?;
    Ok(snapshot)
}

pub fn current_timestamp() -> i64 {
    Utc::now().timestamp_millis()
}
