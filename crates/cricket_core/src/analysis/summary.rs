use schemars::schema::RootSchema;
use serde::{Deserialize, Serialize};

use crate::engine::controller::{compute_result, MatchDecision};
use crate::models::{Innings, InningsNumber, Match, MatchStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InningsSummary {
    pub batting_team: String,
    pub runs: u32,
    pub wickets: u32,
    pub balls: u32,
    pub overs: String,
}

/// What an external report writer gets to see of a match. No player-level
/// figures, no history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummaryInput {
    pub team_a: String,
    pub team_b: String,
    pub overs_per_innings: u32,
    pub venue: Option<String>,
    pub series: Option<String>,
    pub innings: Vec<InningsSummary>,
    pub status: MatchStatus,
    pub decision: MatchDecision,
}

fn summarize(m: &Match, innings: &Innings) -> InningsSummary {
    InningsSummary {
        batting_team: m
            .team(&innings.batting_team_id)
            .map(|t| t.name.clone())
            .unwrap_or_default(),
        runs: innings.total_runs,
        wickets: innings.total_wickets,
        balls: innings.total_balls,
        overs: innings.overs_display(),
    }
}

impl MatchSummaryInput {
    /// Innings that have not started are left out.
    pub fn of(m: &Match, wicket_weight: u32) -> Self {
        let innings = [InningsNumber::First, InningsNumber::Second]
            .into_iter()
            .map(|n| m.innings(n))
            .filter(|i| i.has_started())
            .map(|i| summarize(m, i))
            .collect();

        Self {
            team_a: m.team_a.name.clone(),
            team_b: m.team_b.name.clone(),
            overs_per_innings: m.total_overs,
            venue: m.venue.clone(),
            series: m.series.clone(),
            innings,
            status: m.status,
            decision: compute_result(m, wicket_weight).decision,
        }
    }
}

/// JSON schema of the match snapshot as stored and synced.
pub fn snapshot_schema() -> RootSchema {
    schemars::schema_for!(Match)
}
