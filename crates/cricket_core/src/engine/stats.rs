//! Statistics aggregator: one delivery's effect on one batter and one bowler.
//!
//! No validation happens here. Odd combinations (a six off a no-ball that
//! also took a wicket) are applied by the same fixed rules as anything else.

use crate::models::{BallInput, ExtraKind, Player};

/// Apply a delivery to the striker's batting figures.
pub fn credit_striker(striker: &mut Player, ball: &BallInput) {
    let credits_batter = ball.extra.map_or(true, ExtraKind::credits_batter);
    if credits_batter {
        striker.runs += ball.runs;
        match ball.runs {
            4 => striker.fours += 1,
            6 => striker.sixes += 1,
            _ => {}
        }
    }

    if ball.extra != Some(ExtraKind::Wide) {
        striker.balls += 1;
        if ball.total_runs() == 0 {
            striker.dots_face += 1;
        }
    }

    if let Some(wicket) = ball.wicket {
        striker.is_out = true;
        striker.how_out = Some(wicket);
    }
}

/// Apply a delivery to the bowler's figures.
pub fn charge_bowler(bowler: &mut Player, ball: &BallInput) {
    let charged = match ball.extra {
        Some(extra) if !extra.charged_to_bowler() => 0,
        _ => ball.total_runs(),
    };
    bowler.runs_conceded += charged;

    match ball.extra {
        Some(ExtraKind::Wide) => bowler.wides_conceded += 1,
        Some(ExtraKind::NoBall) => bowler.no_balls_conceded += 1,
        _ => {}
    }

    if ball.wicket.is_some_and(|w| w.credited_to_bowler()) {
        bowler.wickets += 1;
    }

    if ball.is_legal() {
        bowler.overs_bowled.add_ball();
        if charged == 0 {
            bowler.dots_bowled += 1;
        }
    }
}
