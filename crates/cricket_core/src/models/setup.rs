//! Input for creating a match: team sheets, overs, optional metadata.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TeamSetup {
    #[validate(length(min = 1, message = "team name must not be empty"))]
    pub name: String,
    /// Player names in batting order.
    #[validate(length(min = 2, message = "a team needs at least two players"))]
    pub players: Vec<String>,
}

impl TeamSetup {
    pub fn new<I, S>(name: impl Into<String>, players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { name: name.into(), players: players.into_iter().map(Into::into).collect() }
    }

    /// `"{prefix} Player N"` placeholders, the way a new match sheet starts.
    pub fn numbered(name: impl Into<String>, prefix: &str, count: usize) -> Self {
        Self::new(name, (1..=count).map(|i| format!("{} Player {}", prefix, i)))
    }

    pub fn has_blank_player_name(&self) -> bool {
        self.players.iter().any(|p| p.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchMeta {
    /// Opaque identity of the scorer that owns the match.
    pub owner_id: Option<String>,
    pub venue: Option<String>,
    pub series: Option<String>,
    pub umpires: Vec<String>,
}

impl MatchMeta {
    /// Umpires as typed in one comma separated field.
    pub fn with_umpire_list(mut self, umpires: &str) -> Self {
        self.umpires = umpires
            .split(',')
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(str::to_string)
            .collect();
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchSetup {
    #[validate]
    pub team_a: TeamSetup,
    #[validate]
    pub team_b: TeamSetup,
    #[validate(range(min = 1, max = 50, message = "overs per innings must be 1-50"))]
    pub overs_per_innings: u32,
    #[serde(default)]
    pub meta: MatchMeta,
}

impl MatchSetup {
    pub fn new(team_a: TeamSetup, team_b: TeamSetup, overs_per_innings: u32) -> Self {
        Self { team_a, team_b, overs_per_innings, meta: MatchMeta::default() }
    }

    pub fn with_meta(mut self, meta: MatchMeta) -> Self {
        self.meta = meta;
        self
    }
}
