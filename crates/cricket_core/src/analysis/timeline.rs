use serde::{Deserialize, Serialize};

use crate::models::{Innings, Team};

/// One over as shown on the live timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverSummary {
    /// 1-based.
    pub number: usize,
    pub bowler_id: String,
    pub bowler_name: Option<String>,
    /// Everything added to the total, penalties included.
    pub runs: u32,
    pub wickets: u32,
    pub balls: Vec<String>,
    pub complete: bool,
}

/// Overs of `innings` in bowling order. `bowling` resolves bowler names.
pub fn over_timeline(innings: &Innings, bowling: &Team) -> Vec<OverSummary> {
    innings
        .overs
        .iter()
        .enumerate()
        .map(|(i, over)| OverSummary {
            number: i + 1,
            bowler_id: over.bowler_id.clone(),
            bowler_name: bowling.player(&over.bowler_id).map(|p| p.name.clone()),
            runs: over.runs(),
            wickets: over.wickets(),
            balls: over.balls.iter().map(|b| b.notation()).collect(),
            complete: over.is_complete(),
        })
        .collect()
}
