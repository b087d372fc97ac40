use serde::{Deserialize, Serialize};

use crate::models::{Match, BALLS_PER_OVER};

fn per_over(runs: u32, balls: u32) -> f64 {
    if balls == 0 {
        return 0.0;
    }
    runs as f64 / (balls as f64 / BALLS_PER_OVER as f64)
}

/// Runs per hundred balls faced.
pub fn strike_rate(runs: u32, balls: u32) -> f64 {
    if balls == 0 {
        return 0.0;
    }
    runs as f64 / balls as f64 * 100.0
}

/// Runs conceded per six legal balls.
pub fn economy(runs_conceded: u32, legal_balls: u32) -> f64 {
    per_over(runs_conceded, legal_balls)
}

/// Runs still required per over; zero once no balls remain.
pub fn required_run_rate(runs_needed: u32, balls_remaining: u32) -> f64 {
    per_over(runs_needed, balls_remaining)
}

/// Header figures for the innings in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveFigures {
    pub runs: u32,
    pub wickets: u32,
    pub overs: String,
    pub current_run_rate: f64,
    pub balls_remaining: u32,
    /// Chase only.
    pub target: Option<u32>,
    pub runs_needed: Option<u32>,
    pub required_run_rate: Option<f64>,
}

impl LiveFigures {
    pub fn of(m: &Match) -> Self {
        let innings = m.current_innings();
        let balls_remaining =
            (m.total_overs * BALLS_PER_OVER).saturating_sub(innings.total_balls);
        let target = m.chase_target();
        let runs_needed = target.map(|t| t.saturating_sub(innings.total_runs));

        Self {
            runs: innings.total_runs,
            wickets: innings.total_wickets,
            overs: innings.overs_display(),
            current_run_rate: innings.run_rate(),
            balls_remaining,
            target,
            runs_needed,
            required_run_rate: runs_needed.map(|r| required_run_rate(r, balls_remaining)),
        }
    }

    /// `126/4`
    pub fn score(&self) -> String {
        format!("{}/{}", self.runs, self.wickets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::controller::new_match;
    use crate::models::{InningsNumber, MatchSetup, TeamSetup};

    fn game() -> Match {
        let setup = MatchSetup::new(
            TeamSetup::numbered("Team A", "A", 11),
            TeamSetup::numbered("Team B", "B", 11),
            20,
        );
        new_match(&setup).unwrap()
    }

    #[test]
    fn test_rates() {
        assert_eq!(strike_rate(50, 40), 125.0);
        assert_eq!(strike_rate(10, 0), 0.0);
        assert_eq!(economy(24, 24), 6.0);
        assert_eq!(economy(5, 0), 0.0);
        assert_eq!(required_run_rate(30, 0), 0.0);
    }

    #[test]
    fn test_first_innings_has_no_chase_figures() {
        let mut m = game();
        m.innings1.total_runs = 150;
        m.innings1.total_balls = 120;
        let live = LiveFigures::of(&m);
        assert!((live.current_run_rate - 7.5).abs() < 1e-9);
        assert_eq!(live.overs, "20.0");
        assert_eq!(live.balls_remaining, 0);
        assert_eq!(live.target, None);
        assert_eq!(live.required_run_rate, None);
        assert_eq!(live.score(), "150/0");
    }

    #[test]
    fn test_chase_figures() {
        let mut m = game();
        m.innings1.total_runs = 150;
        m.current_innings = InningsNumber::Second;
        m.innings2.total_runs = 91;
        m.innings2.total_wickets = 3;
        m.innings2.total_balls = 84;
        let live = LiveFigures::of(&m);
        assert_eq!(live.target, Some(151));
        assert_eq!(live.runs_needed, Some(60));
        assert_eq!(live.balls_remaining, 36);
        assert_eq!(live.required_run_rate, Some(10.0));
        assert_eq!(live.overs, "14.0");
    }
}
