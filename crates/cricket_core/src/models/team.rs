use super::Player;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Team {
    pub id: String,
    pub name: String,
    /// Batting order.
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>, players: Vec<Player>) -> Self {
        Self { id: id.into(), name: name.into(), players }
    }

    /// Dismissals that end an innings: the last batter cannot bat alone.
    pub fn all_out_threshold(&self) -> u32 {
        self.players.len().saturating_sub(1) as u32
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn player_mut(&mut self, player_id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.player(player_id).is_some()
    }

    pub fn total_runs_off_bat(&self) -> u32 {
        self.players.iter().map(|p| p.runs).sum()
    }
}
