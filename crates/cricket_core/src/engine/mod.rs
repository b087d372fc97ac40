pub mod config;
pub mod controller;
pub mod history;
pub mod over_tracker;
pub mod resolution;
pub mod scorer;
pub mod stats;


pub use config::ScoringConfig;
pub use controller::{
    compute_result, phase, Margin, MatchDecision, MatchPhase, MatchResult, PlayerOfMatch,
};
pub use resolution::{BallOutcome, BallSignals};
pub use scorer::Scorer;
