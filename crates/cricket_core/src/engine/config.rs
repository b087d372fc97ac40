//! # Scoring configuration
//!
//! Policy knobs of the engine. The laws themselves (six balls an over, one
//! run for a wide or no-ball) are constants in `models::ball`.
//!
//! ```rust
//! use cricket_core::engine::config::ScoringConfig;
//!
//! let config = ScoringConfig::default();
//! assert_eq!(config.history_capacity, 20);
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Undo depth; the oldest snapshot is dropped beyond this.
    pub history_capacity: usize,
    /// Value of one wicket against one run when picking the player of the match.
    pub player_of_match_wicket_weight: u32,
    /// Matches kept by the in-memory store, most recent first.
    pub recent_match_limit: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self { history_capacity: 20, player_of_match_wicket_weight: 20, recent_match_limit: 15 }
    }
}

impl ScoringConfig {
    pub fn standard() -> Self {
        Self::default()
    }

    /// Shallow history so overflow paths are cheap to reach.
    pub fn for_tests() -> Self {
        Self { history_capacity: 3, recent_match_limit: 2, ..Self::default() }
    }

    /// Missing keys fall back to the defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}
