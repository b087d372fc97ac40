//! # cricket_core - Ball-by-Ball Cricket Scoring Engine
//!
//! Turns a sequence of deliveries into a complete match state: team totals,
//! per-player batting and bowling figures, strike rotation, over and innings
//! transitions, the final result, and single-step undo.
//!
//! ## Features
//! - Copy-on-write transitions: `&Match` in, new `Match` out
//! - Advisory signals for the presentation layer (wicket follow-up, new over)
//! - Bounded undo history carried inside the match snapshot
//! - Compressed, checksummed local persistence and a remote sync seam

// Doc formatting lints - purely cosmetic, fix incrementally
#![allow(clippy::doc_lazy_continuation)]

pub mod analysis;
pub mod engine;
pub mod error;
pub mod models;
pub mod save;
pub mod session;

pub use error::{Result, ScoringError};

// Re-export engine entry points
pub use engine::{
    BallOutcome, BallSignals, Margin, MatchDecision, MatchPhase, MatchResult, PlayerOfMatch,
    Scorer, ScoringConfig,
};

// Re-export the match model
pub use models::{
    BallInput, BallRecord, ExtraKind, Innings, InningsEndReason, InningsNumber, Match, MatchMeta,
    MatchSetup, MatchStatus, Over, OversBowled, Player, Team, TeamSetup, WicketKind,
};

// Re-export persistence
pub use save::{FileMatchStore, InMemoryMatchStore, MatchStore, SaveError, SyncSink};
pub use session::{ScoringSession, SessionError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> MatchSetup {
        MatchSetup::new(
            TeamSetup::new("Home", ["H1", "H2", "H3"]),
            TeamSetup::new("Away", ["A1", "A2", "A3"]),
            2,
        )
    }

    #[test]
    fn test_snapshot_wire_shape() {
        let scorer = Scorer::default();
        let m = scorer.create_match(&setup()).unwrap();
        let value = serde_json::to_value(&m).unwrap();

        assert_eq!(value["currentInnings"], 1);
        assert_eq!(value["status"], "ongoing");
        assert_eq!(value["totalOvers"], 2);
        assert!(value["currentBowlerId"].is_null());
        assert_eq!(value["teamA"]["players"][0]["oversBowled"], 0.0);
        assert!(value.get("history").is_none());
        assert!(value["innings1"]["overs"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_snapshot_json_round_trip_after_play() {
        let scorer = Scorer::default();
        let m = scorer.create_match(&setup()).unwrap();
        let bowler = m.team_b.players[0].id.clone();
        let mut m = scorer.assign_bowler(&m, &bowler).unwrap();
        for _ in 0..7 {
            let outcome = scorer.resolve_ball(&m, BallInput::runs(1));
            m = match outcome {
                Ok(outcome) => outcome.state,
                Err(ScoringError::NoBowlerAssigned) => {
                    let next = m.team_b.players[1].id.clone();
                    scorer.assign_bowler(&m, &next).unwrap()
                }
                Err(other) => panic!("unexpected: {other}"),
            };
        }

        let json = serde_json::to_string(&m).unwrap();
        let back: Match = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
        assert_eq!(back.team_b.players[0].overs_bowled.to_string(), "1.0");
    }

    #[test]
    fn test_version_constants() {
        assert!(!VERSION.is_empty());
        assert_eq!(SCHEMA_VERSION, 1);
    }
}
