//! Innings and match lifecycle.
//!
//! ```text
//! Innings1InProgress ──end──▶ AwaitingSecondInnings ──start──▶ Innings2InProgress
//!                                                                    │ end / target
//!                                                                    ▼
//!                                                                Completed
//! ```
//!
//! A first innings that ends leaves the status `ongoing`; the chase starts
//! only through [`start_second_innings`]. The end of the second innings, or
//! reaching the target, completes the match at once.

use chrono::Utc;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::error::{Result, ScoringError};
use crate::models::{
    Innings, InningsEndReason, InningsNumber, Match, MatchSetup, MatchStatus, Player, Team,
    TeamSetup,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    Innings1InProgress,
    /// First innings over; waiting for an explicit start of the chase.
    AwaitingSecondInnings,
    Innings2InProgress,
    Completed,
}

pub fn phase(m: &Match) -> MatchPhase {
    if m.is_completed() {
        return MatchPhase::Completed;
    }
    match m.current_innings {
        InningsNumber::First if innings_end_reason(m).is_some() => {
            MatchPhase::AwaitingSecondInnings
        }
        InningsNumber::First => MatchPhase::Innings1InProgress,
        InningsNumber::Second => MatchPhase::Innings2InProgress,
    }
}

/// End-of-innings condition holding for the current innings, if any.
pub fn innings_end_reason(m: &Match) -> Option<InningsEndReason> {
    m.current_innings().end_reason(
        m.batting_team().all_out_threshold(),
        m.total_overs,
        m.chase_target(),
    )
}

/// Evaluate the end conditions after a ball; completes the match when the
/// second innings is over.
pub fn apply_end_conditions(m: &mut Match) -> Option<InningsEndReason> {
    let reason = innings_end_reason(m)?;
    let innings = m.current_innings();
    info!(
        innings = u8::from(m.current_innings),
        %reason,
        score = %format!("{}/{}", innings.total_runs, innings.total_wickets),
        overs = %innings.overs_display(),
        "innings over"
    );

    if m.current_innings == InningsNumber::Second {
        m.status = MatchStatus::Completed;
        info!(match_id = %m.id, "match completed");
    }
    Some(reason)
}

fn build_team(setup: &TeamSetup) -> Team {
    let players = setup
        .players
        .iter()
        .map(|name| Player::new(Uuid::new_v4().to_string(), name.trim()))
        .collect();
    Team::new(Uuid::new_v4().to_string(), setup.name.trim(), players)
}

/// Zeroed match: team A bats first with its first two players at the crease,
/// no bowler selected yet.
pub fn new_match(setup: &MatchSetup) -> Result<Match> {
    setup.validate().map_err(|e| ScoringError::InvalidSetup(e.to_string()))?;
    if setup.team_a.has_blank_player_name() || setup.team_b.has_blank_player_name() {
        return Err(ScoringError::InvalidSetup("player names must not be empty".to_string()));
    }

    let team_a = build_team(&setup.team_a);
    let team_b = build_team(&setup.team_b);

    let m = Match {
        id: Uuid::new_v4().to_string(),
        owner_id: setup.meta.owner_id.clone(),
        innings1: Innings::new(team_a.id.clone()),
        innings2: Innings::new(team_b.id.clone()),
        current_striker_id: team_a.players.first().map(|p| p.id.clone()),
        current_non_striker_id: team_a.players.get(1).map(|p| p.id.clone()),
        current_bowler_id: None,
        team_a,
        team_b,
        total_overs: setup.overs_per_innings,
        current_innings: InningsNumber::First,
        status: MatchStatus::Ongoing,
        venue: setup.meta.venue.clone().filter(|v| !v.trim().is_empty()),
        series: setup.meta.series.clone().filter(|s| !s.trim().is_empty()),
        umpires: setup.meta.umpires.clone(),
        timestamp: Utc::now().timestamp_millis(),
        history: Vec::new(),
    };

    info!(
        match_id = %m.id,
        team_a = %m.team_a.name,
        team_b = %m.team_b.name,
        overs = m.total_overs,
        "match created"
    );
    Ok(m)
}

fn ensure_in_play(m: &Match) -> Result<()> {
    if m.is_completed() {
        return Err(ScoringError::MatchCompleted);
    }
    if let Some(reason) = innings_end_reason(m) {
        return Err(ScoringError::InningsComplete { reason });
    }
    Ok(())
}

pub fn assign_bowler(m: &mut Match, bowler_id: &str) -> Result<()> {
    ensure_in_play(m)?;
    if !m.bowling_team().contains(bowler_id) {
        return Err(ScoringError::UnknownPlayer { player_id: bowler_id.to_string() });
    }
    m.current_bowler_id = Some(bowler_id.to_string());
    Ok(())
}

/// Replace whichever current batter is out with `incoming_id`.
pub fn bring_in_batter(m: &mut Match, incoming_id: &str) -> Result<()> {
    ensure_in_play(m)?;

    let batting = m.batting_team();
    let incoming = batting
        .player(incoming_id)
        .ok_or_else(|| ScoringError::UnknownPlayer { player_id: incoming_id.to_string() })?;
    let at_crease = [m.current_striker_id.as_deref(), m.current_non_striker_id.as_deref()];
    if incoming.is_out || at_crease.contains(&Some(incoming_id)) {
        return Err(ScoringError::BatterUnavailable { player_id: incoming_id.to_string() });
    }

    let is_out = |id: Option<&str>| id.and_then(|id| batting.player(id)).is_some_and(|p| p.is_out);
    let striker_out = is_out(at_crease[0]);
    let non_striker_out = is_out(at_crease[1]);

    if striker_out {
        m.current_striker_id = Some(incoming_id.to_string());
    } else if non_striker_out {
        m.current_non_striker_id = Some(incoming_id.to_string());
    } else {
        return Err(ScoringError::NoDismissedBatter);
    }
    Ok(())
}

pub fn start_second_innings(m: &mut Match) -> Result<()> {
    if m.is_completed() {
        return Err(ScoringError::MatchCompleted);
    }
    if m.current_innings == InningsNumber::Second {
        return Err(ScoringError::AlreadySecondInnings);
    }
    if innings_end_reason(m).is_none() {
        return Err(ScoringError::InningsInProgress);
    }

    m.current_innings = InningsNumber::Second;
    let chasing = m.batting_team();
    let striker = chasing.players.first().map(|p| p.id.clone());
    let non_striker = chasing.players.get(1).map(|p| p.id.clone());
    m.current_striker_id = striker;
    m.current_non_striker_id = non_striker;
    m.current_bowler_id = None;

    info!(
        match_id = %m.id,
        target = m.target(),
        batting = %m.batting_team().name,
        "second innings started"
    );
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Margin {
    Runs(u32),
    Wickets(u32),
}

impl std::fmt::Display for Margin {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (n, unit) = match self {
            Margin::Runs(n) => (*n, "run"),
            Margin::Wickets(n) => (*n, "wicket"),
        };
        write!(f, "{} {}{}", n, unit, if n == 1 { "" } else { "s" })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum MatchDecision {
    /// Not completed yet.
    Pending,
    #[serde(rename_all = "camelCase")]
    Won { team_id: String, team_name: String, margin: Margin },
    Tied,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerOfMatch {
    pub player_id: String,
    pub name: String,
    pub impact: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub decision: MatchDecision,
    pub player_of_match: Option<PlayerOfMatch>,
}

impl MatchResult {
    pub fn winner_id(&self) -> Option<&str> {
        match &self.decision {
            MatchDecision::Won { team_id, .. } => Some(team_id),
            _ => None,
        }
    }

    pub fn headline(&self) -> String {
        match &self.decision {
            MatchDecision::Pending => "Match in progress".to_string(),
            MatchDecision::Tied => "Match Tied".to_string(),
            MatchDecision::Won { team_name, margin, .. } => {
                format!("{} won by {}", team_name, margin)
            }
        }
    }
}

/// Winner, margin and player of the match. Only a completed match has a
/// decision.
pub fn compute_result(m: &Match, wicket_weight: u32) -> MatchResult {
    let pending = MatchResult { decision: MatchDecision::Pending, player_of_match: None };
    if !m.is_completed() {
        return pending;
    }
    let (Some(first), Some(second)) =
        (m.team(&m.innings1.batting_team_id), m.team(&m.innings2.batting_team_id))
    else {
        return pending;
    };

    let r1 = m.innings1.total_runs;
    let r2 = m.innings2.total_runs;
    let (winner, margin) = if r1 > r2 {
        (first, Margin::Runs(r1 - r2))
    } else if r2 > r1 {
        let remaining = second.all_out_threshold().saturating_sub(m.innings2.total_wickets);
        (second, Margin::Wickets(remaining))
    } else {
        return MatchResult { decision: MatchDecision::Tied, player_of_match: None };
    };

    let mut best: Option<&Player> = None;
    for player in &winner.players {
        let better = best.map_or(true, |b| {
            player.impact_score(wicket_weight) > b.impact_score(wicket_weight)
        });
        if better {
            best = Some(player);
        }
    }

    MatchResult {
        decision: MatchDecision::Won {
            team_id: winner.id.clone(),
            team_name: winner.name.clone(),
            margin,
        },
        player_of_match: best.map(|p| PlayerOfMatch {
            player_id: p.id.clone(),
            name: p.name.clone(),
            impact: p.impact_score(wicket_weight),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MatchMeta, OversBowled};

    fn setup(players: usize, overs: u32) -> MatchSetup {
        MatchSetup::new(
            TeamSetup::numbered("Lions", "L", players),
            TeamSetup::numbered("Tigers", "T", players),
            overs,
        )
    }

    #[test]
    fn test_new_match_is_zeroed() {
        let meta = MatchMeta {
            owner_id: Some("owner-1".into()),
            venue: Some("Oval".into()),
            series: Some("  ".into()),
            umpires: vec!["Dar".into()],
        };
        let m = new_match(&setup(11, 20).with_meta(meta)).unwrap();
        assert_eq!(m.current_innings, InningsNumber::First);
        assert_eq!(m.status, MatchStatus::Ongoing);
        assert_eq!(m.innings1.batting_team_id, m.team_a.id);
        assert_eq!(m.innings2.batting_team_id, m.team_b.id);
        assert_eq!(m.current_striker_id.as_deref(), Some(m.team_a.players[0].id.as_str()));
        assert_eq!(m.current_non_striker_id.as_deref(), Some(m.team_a.players[1].id.as_str()));
        assert_eq!(m.current_bowler_id, None);
        assert_eq!(m.owner_id.as_deref(), Some("owner-1"));
        assert_eq!(m.venue.as_deref(), Some("Oval"));
        assert_eq!(m.series, None);
        assert!(m.timestamp > 0);
        assert_eq!(phase(&m), MatchPhase::Innings1InProgress);
    }

    #[test]
    fn test_new_match_rejects_invalid_setup() {
        assert!(matches!(new_match(&setup(1, 20)), Err(ScoringError::InvalidSetup(_))));
        assert!(matches!(new_match(&setup(11, 0)), Err(ScoringError::InvalidSetup(_))));

        let blank = MatchSetup::new(
            TeamSetup::new("Lions", ["One", " "]),
            TeamSetup::numbered("Tigers", "T", 2),
            5,
        );
        assert!(matches!(new_match(&blank), Err(ScoringError::InvalidSetup(_))));
    }

    #[test]
    fn test_assign_bowler_must_be_bowling_side() {
        let mut m = new_match(&setup(3, 2)).unwrap();
        let batter = m.team_a.players[0].id.clone();
        assert!(matches!(
            assign_bowler(&mut m, &batter),
            Err(ScoringError::UnknownPlayer { .. })
        ));
        let bowler = m.team_b.players[2].id.clone();
        assign_bowler(&mut m, &bowler).unwrap();
        assert_eq!(m.current_bowler_id, Some(bowler));
    }

    #[test]
    fn test_second_innings_requires_first_to_end() {
        let mut m = new_match(&setup(3, 2)).unwrap();
        assert!(matches!(start_second_innings(&mut m), Err(ScoringError::InningsInProgress)));

        m.innings1.total_wickets = 2;
        assert_eq!(phase(&m), MatchPhase::AwaitingSecondInnings);
        m.current_bowler_id = Some(m.team_b.players[0].id.clone());
        start_second_innings(&mut m).unwrap();

        assert_eq!(phase(&m), MatchPhase::Innings2InProgress);
        assert_eq!(m.current_striker_id.as_deref(), Some(m.team_b.players[0].id.as_str()));
        assert_eq!(m.current_non_striker_id.as_deref(), Some(m.team_b.players[1].id.as_str()));
        assert_eq!(m.current_bowler_id, None);
        assert!(matches!(start_second_innings(&mut m), Err(ScoringError::AlreadySecondInnings)));
    }

    #[test]
    fn test_bring_in_batter_replaces_dismissed_end() {
        let mut m = new_match(&setup(4, 2)).unwrap();
        let next = m.team_a.players[2].id.clone();
        assert!(matches!(bring_in_batter(&mut m, &next), Err(ScoringError::NoDismissedBatter)));

        m.team_a.players[1].is_out = true;
        m.innings1.total_wickets = 1;
        let striker = m.team_a.players[0].id.clone();
        assert!(matches!(
            bring_in_batter(&mut m, &striker),
            Err(ScoringError::BatterUnavailable { .. })
        ));

        bring_in_batter(&mut m, &next).unwrap();
        assert_eq!(m.current_non_striker_id, Some(next));
        assert_eq!(m.current_striker_id, Some(striker));
    }

    fn completed(r1: u32, r2: u32, wickets2: u32) -> Match {
        let mut m = new_match(&setup(11, 20)).unwrap();
        m.innings1.total_runs = r1;
        m.innings2.total_runs = r2;
        m.innings2.total_wickets = wickets2;
        m.current_innings = InningsNumber::Second;
        m.status = MatchStatus::Completed;
        m
    }

    #[test]
    fn test_result_pending_until_completed() {
        let m = new_match(&setup(11, 20)).unwrap();
        let result = compute_result(&m, 20);
        assert_eq!(result.decision, MatchDecision::Pending);
        assert_eq!(result.headline(), "Match in progress");
    }

    #[test]
    fn test_defending_side_wins_by_runs() {
        let mut m = completed(150, 140, 10);
        m.team_a.players[3].runs = 40;
        m.team_a.players[7].wickets = 3;
        m.team_a.players[7].overs_bowled = OversBowled::from_balls(24);
        let result = compute_result(&m, 20);
        assert_eq!(result.winner_id(), Some(m.team_a.id.as_str()));
        assert_eq!(result.headline(), "Lions won by 10 runs");
        let pom = result.player_of_match.unwrap();
        assert_eq!(pom.player_id, m.team_a.players[7].id);
        assert_eq!(pom.impact, 60);
    }

    #[test]
    fn test_chasing_side_wins_by_wickets_remaining() {
        let m = completed(120, 125, 3);
        let result = compute_result(&m, 20);
        assert_eq!(
            result.decision,
            MatchDecision::Won {
                team_id: m.team_b.id.clone(),
                team_name: "Tigers".into(),
                margin: Margin::Wickets(7),
            }
        );
    }

    #[test]
    fn test_player_of_match_tie_goes_to_roster_order() {
        let mut m = completed(120, 125, 9);
        m.team_b.players[4].runs = 20;
        m.team_b.players[2].wickets = 1;
        let result = compute_result(&m, 20);
        assert_eq!(result.headline(), "Tigers won by 1 wicket");
        assert_eq!(result.player_of_match.unwrap().player_id, m.team_b.players[2].id);
    }

    #[test]
    fn test_equal_scores_tie() {
        let m = completed(99, 99, 4);
        let result = compute_result(&m, 20);
        assert_eq!(result.decision, MatchDecision::Tied);
        assert!(result.player_of_match.is_none());
        assert_eq!(result.headline(), "Match Tied");
    }
}
