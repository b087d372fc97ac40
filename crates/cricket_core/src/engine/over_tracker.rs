use crate::models::{BallRecord, Innings, Over};

/// Append a ball to the innings' current over, opening a new over tagged
/// with `bowler_id` when there is none yet or the last one is full.
///
/// Returns the legal deliveries in the over that received the ball.
pub fn place_ball(innings: &mut Innings, bowler_id: &str, ball: BallRecord) -> u32 {
    let needs_new_over = innings.current_over().map_or(true, Over::is_complete);
    if needs_new_over {
        innings.overs.push(Over::new(bowler_id));
    }

    match innings.overs.last_mut() {
        Some(over) => {
            over.balls.push(ball);
            over.legal_deliveries()
        }
        None => 0,
    }
}
