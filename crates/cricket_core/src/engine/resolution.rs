//! Ball resolution: the single transition from one match state to the next
//! for one delivery.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::controller;
use super::over_tracker::place_ball;
use super::stats::{charge_bowler, credit_striker};
use crate::error::{Result, ScoringError};
use crate::models::{
    BallInput, BallRecord, InningsEndReason, Match, BALLS_PER_OVER, MAX_RUNS_PER_BALL,
};

/// Advisory flags for the presentation layer. Not part of the match state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BallSignals {
    /// A batter was dismissed and a replacement has to come in.
    pub wicket_needs_followup: bool,
    /// The over is complete and the bowler was cleared.
    pub over_needs_new_bowler: bool,
    /// The innings ended on this ball.
    pub innings_ended: Option<InningsEndReason>,
    /// The match ended on this ball.
    pub match_completed: bool,
}

impl BallSignals {
    pub fn innings_or_match_ended(&self) -> bool {
        self.innings_ended.is_some() || self.match_completed
    }
}

/// Next state plus the advisory signals for it.
#[derive(Debug, Clone, PartialEq)]
pub struct BallOutcome {
    pub state: Match,
    pub signals: BallSignals,
}

/// Refuse a delivery the match cannot take, before anything is touched.
pub fn check_can_bowl(m: &Match, ball: &BallInput) -> Result<()> {
    if !ball.runs_in_range() {
        return Err(ScoringError::RunsOutOfRange { runs: ball.runs, max: MAX_RUNS_PER_BALL });
    }
    if m.is_completed() {
        return Err(ScoringError::MatchCompleted);
    }
    if let Some(reason) = controller::innings_end_reason(m) {
        return Err(ScoringError::InningsComplete { reason });
    }
    if m.current_bowler_id.is_none() {
        return Err(ScoringError::NoBowlerAssigned);
    }
    Ok(())
}

/// Apply one delivery to `m` in place. Callers hand in a working copy; on
/// error nothing has been modified.
pub fn apply_ball(m: &mut Match, ball: &BallInput) -> Result<BallSignals> {
    check_can_bowl(m, ball)?;

    let striker_id = m.current_striker_id.clone().unwrap_or_default();
    let bowler_id = m.current_bowler_id.clone().unwrap_or_default();

    let (innings, batting, bowling) = m.play_parts_mut();

    innings.total_runs += ball.total_runs();
    if ball.is_legal() {
        innings.total_balls += 1;
    }
    if ball.wicket.is_some() {
        innings.total_wickets += 1;
    }

    let record = BallRecord::new(ball, &striker_id, &bowler_id);
    let legal_in_over = place_ball(innings, &bowler_id, record);
    let over_complete = legal_in_over >= BALLS_PER_OVER;
    let maiden_bowler = innings
        .current_over()
        .filter(|o| over_complete && o.is_maiden())
        .map(|o| o.bowler_id.clone());
    let maiden = maiden_bowler.is_some();

    if let Some(striker) = batting.player_mut(&striker_id) {
        credit_striker(striker, ball);
    }
    if let Some(bowler) = bowling.player_mut(&bowler_id) {
        charge_bowler(bowler, ball);
    }
    if let Some(bowler) = maiden_bowler.and_then(|id| bowling.player_mut(&id)) {
        bowler.maidens += 1;
    }

    debug!(
        runs = ball.runs,
        extra = ?ball.extra,
        wicket = ?ball.wicket,
        total = innings.total_runs,
        wickets = innings.total_wickets,
        overs = %innings.overs_display(),
        "ball resolved"
    );

    if ball.runs % 2 == 1 {
        m.swap_strike();
    }

    let mut signals = BallSignals::default();

    if let Some(reason) = controller::apply_end_conditions(m) {
        signals.innings_ended = Some(reason);
        signals.match_completed = m.is_completed();
        return Ok(signals);
    }

    if over_complete {
        m.swap_strike();
        m.current_bowler_id = None;
        signals.over_needs_new_bowler = true;
        info!(over = m.current_innings().overs.len(), maiden, "over complete");
    }

    signals.wicket_needs_followup = ball.wicket.is_some();

    Ok(signals)
}
