// Match persistence: MessagePack + LZ4 with versioning and integrity checks

pub mod error;
pub mod format;
pub mod store;

pub use error::SaveError;
pub use format::{decompress_and_deserialize, serialize_and_compress, MatchSnapshotFile};
pub use store::{FileMatchStore, InMemoryMatchStore, MatchStore, SyncSink};

pub const SNAPSHOT_VERSION: u32 = 1;
