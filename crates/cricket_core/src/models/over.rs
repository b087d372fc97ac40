use super::ball::{BallRecord, BALLS_PER_OVER};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Over {
    /// Empty when the over was opened without a bowler selected.
    pub bowler_id: String,
    pub balls: Vec<BallRecord>,
}

impl Over {
    pub fn new(bowler_id: impl Into<String>) -> Self {
        Self { bowler_id: bowler_id.into(), balls: Vec::new() }
    }

    pub fn legal_deliveries(&self) -> u32 {
        self.balls.iter().filter(|b| b.is_legal()).count() as u32
    }

    pub fn is_complete(&self) -> bool {
        self.legal_deliveries() >= BALLS_PER_OVER
    }

    /// Runs added to the innings total during this over.
    pub fn runs(&self) -> u32 {
        self.balls.iter().map(BallRecord::total_runs).sum()
    }

    pub fn runs_conceded_by_bowler(&self) -> u32 {
        self.balls.iter().map(BallRecord::bowler_runs).sum()
    }

    pub fn wickets(&self) -> u32 {
        self.balls.iter().filter(|b| b.is_wicket).count() as u32
    }

    /// A complete over, bowled throughout by the bowler it was opened for,
    /// in which that bowler was charged nothing.
    pub fn is_maiden(&self) -> bool {
        self.is_complete()
            && self.runs_conceded_by_bowler() == 0
            && self.balls.iter().all(|b| b.bowler_id == self.bowler_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BallInput, ExtraKind};

    fn over_of(inputs: &[BallInput]) -> Over {
        let mut over = Over::new("b1");
        over.balls = inputs.iter().map(|i| BallRecord::new(i, "s1", "b1")).collect();
        over
    }

    #[test]
    fn test_wides_do_not_fill_the_over() {
        let mut inputs = vec![BallInput::runs(0); 5];
        inputs.push(BallInput::extra(0, ExtraKind::Wide));
        let over = over_of(&inputs);
        assert_eq!(over.legal_deliveries(), 5);
        assert!(!over.is_complete());
        assert_eq!(over.runs(), 1);
    }

    #[test]
    fn test_maiden_ignores_byes() {
        let mut inputs = vec![BallInput::runs(0); 5];
        inputs.push(BallInput::extra(4, ExtraKind::Bye));
        let over = over_of(&inputs);
        assert!(over.is_complete());
        assert_eq!(over.runs(), 4);
        assert!(over.is_maiden());
    }

    #[test]
    fn test_shared_over_is_not_a_maiden() {
        let mut over = over_of(&[BallInput::runs(0); 6]);
        assert!(over.is_maiden());
        over.balls[5].bowler_id = "b2".into();
        assert!(over.is_complete());
        assert!(!over.is_maiden());
    }

    #[test]
    fn test_no_ball_breaks_maiden() {
        let mut inputs = vec![BallInput::runs(0); 6];
        inputs.push(BallInput::extra(0, ExtraKind::NoBall));
        assert!(!over_of(&inputs).is_maiden());
    }
}
