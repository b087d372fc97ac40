use super::ball::BALLS_PER_OVER;
use super::Over;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Innings {
    pub batting_team_id: String,
    pub total_runs: u32,
    pub total_wickets: u32,
    /// Legal deliveries only.
    pub total_balls: u32,
    #[serde(default)]
    pub overs: Vec<Over>,
}

impl Innings {
    pub fn new(batting_team_id: impl Into<String>) -> Self {
        Self { batting_team_id: batting_team_id.into(), ..Default::default() }
    }

    pub fn current_over(&self) -> Option<&Over> {
        self.overs.last()
    }

    pub fn completed_overs(&self) -> u32 {
        self.total_balls / BALLS_PER_OVER
    }

    /// `12.3` style progress.
    pub fn overs_display(&self) -> String {
        format!("{}.{}", self.completed_overs(), self.total_balls % BALLS_PER_OVER)
    }

    /// Runs per six legal balls; zero before the first legal ball.
    pub fn run_rate(&self) -> f64 {
        if self.total_balls == 0 {
            return 0.0;
        }
        self.total_runs as f64 / (self.total_balls as f64 / BALLS_PER_OVER as f64)
    }

    pub fn has_started(&self) -> bool {
        !self.overs.is_empty()
    }

    /// Which end-of-innings condition holds, if any. `target` is only given
    /// for a chase.
    pub fn end_reason(
        &self,
        all_out_threshold: u32,
        overs_per_innings: u32,
        target: Option<u32>,
    ) -> Option<InningsEndReason> {
        if let Some(target) = target {
            if self.total_runs >= target {
                return Some(InningsEndReason::TargetReached);
            }
        }
        if self.total_wickets >= all_out_threshold {
            return Some(InningsEndReason::AllOut);
        }
        if self.total_balls >= overs_per_innings * BALLS_PER_OVER {
            return Some(InningsEndReason::OversExhausted);
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum InningsEndReason {
    AllOut,
    OversExhausted,
    TargetReached,
}

impl fmt::Display for InningsEndReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InningsEndReason::AllOut => write!(f, "all out"),
            InningsEndReason::OversExhausted => write!(f, "overs exhausted"),
            InningsEndReason::TargetReached => write!(f, "target reached"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_rate_twenty_overs() {
        let innings = Innings { total_runs: 150, total_balls: 120, ..Innings::new("a") };
        assert_eq!(innings.run_rate(), 7.5);
        assert_eq!(format!("{:.2}", innings.run_rate()), "7.50");
        assert_eq!(innings.overs_display(), "20.0");
    }

    #[test]
    fn test_run_rate_before_first_ball() {
        let innings = Innings { total_runs: 1, ..Innings::new("a") };
        assert_eq!(innings.run_rate(), 0.0);
    }

    #[test]
    fn test_end_reason_priority() {
        let innings =
            Innings { total_runs: 121, total_wickets: 10, total_balls: 120, ..Innings::new("b") };
        assert_eq!(innings.end_reason(10, 20, Some(121)), Some(InningsEndReason::TargetReached));
        assert_eq!(innings.end_reason(10, 20, None), Some(InningsEndReason::AllOut));
        assert_eq!(innings.end_reason(11, 20, None), Some(InningsEndReason::OversExhausted));
        assert_eq!(innings.end_reason(11, 21, Some(200)), None);
    }
}
