use thiserror::Error;

use crate::models::InningsEndReason;

#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("Match is already over")]
    MatchCompleted,

    #[error("Innings is over ({reason}); start the second innings first")]
    InningsComplete { reason: InningsEndReason },

    #[error("No bowler assigned for this delivery")]
    NoBowlerAssigned,

    #[error("Runs off one delivery must be 0-{max}, got {runs}")]
    RunsOutOfRange { runs: u32, max: u32 },

    #[error("Unknown player: {player_id}")]
    UnknownPlayer { player_id: String },

    #[error("Unknown team: {team_id}")]
    UnknownTeam { team_id: String },

    #[error("Batter {player_id} cannot come in")]
    BatterUnavailable { player_id: String },

    #[error("Neither current batter has been dismissed")]
    NoDismissedBatter,

    #[error("First innings is still in progress")]
    InningsInProgress,

    #[error("Second innings has already started")]
    AlreadySecondInnings,

    #[error("Invalid match setup: {0}")]
    InvalidSetup(String),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

impl ScoringError {
    /// Rejections that leave the match exactly as it was and only need a
    /// different caller action (select a bowler, start the chase, ...).
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            ScoringError::MatchCompleted
                | ScoringError::InningsComplete { .. }
                | ScoringError::NoBowlerAssigned
                | ScoringError::RunsOutOfRange { .. }
                | ScoringError::NoDismissedBatter
                | ScoringError::InningsInProgress
                | ScoringError::AlreadySecondInnings
        )
    }
}

pub type Result<T> = std::result::Result<T, ScoringError>;
