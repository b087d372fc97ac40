use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] rmp_serde::encode::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] rmp_serde::decode::Error),

    #[error("Decompression error")]
    Decompression,

    #[error("Corrupted data")]
    Corrupted,

    #[error("Version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },

    #[error("Checksum mismatch")]
    ChecksumMismatch,

    #[error("Match not found: {match_id}")]
    NotFound { match_id: String },

    #[error("Invalid match id: {match_id:?}")]
    InvalidMatchId { match_id: String },

    #[error("Remote sync failed: {0}")]
    Remote(String),
}

impl SaveError {
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SaveError::Io(_) | SaveError::NotFound { .. } | SaveError::Remote(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        assert!(SaveError::NotFound { match_id: "m".into() }.is_recoverable());
        assert!(SaveError::Remote("offline".into()).is_recoverable());
        assert!(SaveError::Io(std::io::Error::from(std::io::ErrorKind::NotFound)).is_recoverable());

        assert!(!SaveError::Corrupted.is_recoverable());
        assert!(!SaveError::ChecksumMismatch.is_recoverable());
        assert!(!SaveError::Decompression.is_recoverable());
        assert!(!SaveError::VersionMismatch { found: 2, expected: 1 }.is_recoverable());
        assert!(!SaveError::InvalidMatchId { match_id: "../x".into() }.is_recoverable());
    }
}
