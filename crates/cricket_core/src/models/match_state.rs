use super::ball::BALLS_PER_OVER;
use super::{Innings, Player, Team};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Ongoing,
    Completed,
}

/// Carried on the wire as `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum InningsNumber {
    First,
    Second,
}

impl From<InningsNumber> for u8 {
    fn from(number: InningsNumber) -> Self {
        match number {
            InningsNumber::First => 1,
            InningsNumber::Second => 2,
        }
    }
}

impl TryFrom<u8> for InningsNumber {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(InningsNumber::First),
            2 => Ok(InningsNumber::Second),
            other => Err(format!("innings must be 1 or 2, found {}", other)),
        }
    }
}

/// The match aggregate. This is exactly the snapshot shape handed to storage
/// and sync collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    pub team_a: Team,
    pub team_b: Team,
    pub total_overs: u32,
    #[schemars(with = "u8")]
    pub current_innings: InningsNumber,
    pub status: MatchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub umpires: Vec<String>,
    pub innings1: Innings,
    pub innings2: Innings,
    pub current_striker_id: Option<String>,
    pub current_non_striker_id: Option<String>,
    pub current_bowler_id: Option<String>,
    /// Creation time, unix milliseconds.
    pub timestamp: i64,
    /// Serialized pre-mutation states, newest last. Local only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<String>,
}

impl Match {
    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    pub fn innings(&self, number: InningsNumber) -> &Innings {
        match number {
            InningsNumber::First => &self.innings1,
            InningsNumber::Second => &self.innings2,
        }
    }

    pub fn current_innings(&self) -> &Innings {
        self.innings(self.current_innings)
    }

    pub fn current_innings_mut(&mut self) -> &mut Innings {
        match self.current_innings {
            InningsNumber::First => &mut self.innings1,
            InningsNumber::Second => &mut self.innings2,
        }
    }

    pub fn team(&self, team_id: &str) -> Option<&Team> {
        [&self.team_a, &self.team_b].into_iter().find(|t| t.id == team_id)
    }

    pub fn team_mut(&mut self, team_id: &str) -> Option<&mut Team> {
        if self.team_a.id == team_id {
            Some(&mut self.team_a)
        } else if self.team_b.id == team_id {
            Some(&mut self.team_b)
        } else {
            None
        }
    }

    fn batting_is_team_a(&self) -> bool {
        self.team_a.id == self.current_innings().batting_team_id
    }

    pub fn batting_team(&self) -> &Team {
        if self.batting_is_team_a() {
            &self.team_a
        } else {
            &self.team_b
        }
    }

    pub fn bowling_team(&self) -> &Team {
        if self.batting_is_team_a() {
            &self.team_b
        } else {
            &self.team_a
        }
    }

    /// Split borrow of the current innings with (batting, bowling) rosters.
    pub fn play_parts_mut(&mut self) -> (&mut Innings, &mut Team, &mut Team) {
        let batting_is_a = self.batting_is_team_a();
        let innings = match self.current_innings {
            InningsNumber::First => &mut self.innings1,
            InningsNumber::Second => &mut self.innings2,
        };
        if batting_is_a {
            (innings, &mut self.team_a, &mut self.team_b)
        } else {
            (innings, &mut self.team_b, &mut self.team_a)
        }
    }

    pub fn striker(&self) -> Option<&Player> {
        self.current_striker_id.as_deref().and_then(|id| self.batting_team().player(id))
    }

    pub fn non_striker(&self) -> Option<&Player> {
        self.current_non_striker_id.as_deref().and_then(|id| self.batting_team().player(id))
    }

    pub fn bowler(&self) -> Option<&Player> {
        self.current_bowler_id.as_deref().and_then(|id| self.bowling_team().player(id))
    }

    pub fn swap_strike(&mut self) {
        std::mem::swap(&mut self.current_striker_id, &mut self.current_non_striker_id);
    }

    /// Runs the side batting second needs: first-innings total plus one.
    pub fn target(&self) -> u32 {
        self.innings1.total_runs + 1
    }

    /// The target, only while chasing.
    pub fn chase_target(&self) -> Option<u32> {
        match self.current_innings {
            InningsNumber::First => None,
            InningsNumber::Second => Some(self.target()),
        }
    }

    /// Copy for remote stores: history never leaves the device.
    pub fn without_history(&self) -> Match {
        Match { history: Vec::new(), ..self.clone() }
    }

    /// Ball-count invariant: each innings' legal-ball counter equals the
    /// legal deliveries recorded in its overs, six per completed over.
    pub fn ball_count_consistent(&self) -> bool {
        [&self.innings1, &self.innings2].into_iter().all(|innings| {
            let legal: u32 = innings.overs.iter().map(|o| o.legal_deliveries()).sum();
            let completed = innings.overs.iter().filter(|o| o.is_complete()).count() as u32;
            let in_current = innings
                .current_over()
                .filter(|o| !o.is_complete())
                .map_or(0, |o| o.legal_deliveries());
            legal == innings.total_balls
                && innings.total_balls == BALLS_PER_OVER * completed + in_current
        })
    }
}
