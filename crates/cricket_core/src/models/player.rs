use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ball::{WicketKind, BALLS_PER_OVER};

/// Legal balls bowled, carried on the wire in cricket notation: `3.4` means
/// three overs and four balls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct OversBowled {
    balls: u32,
}

impl OversBowled {
    pub fn from_balls(balls: u32) -> Self {
        Self { balls }
    }

    pub fn balls(self) -> u32 {
        self.balls
    }

    pub fn completed_overs(self) -> u32 {
        self.balls / BALLS_PER_OVER
    }

    pub fn balls_in_over(self) -> u32 {
        self.balls % BALLS_PER_OVER
    }

    /// One more legal ball; the sixth rolls into the next whole over.
    pub fn add_ball(&mut self) {
        self.balls += 1;
    }

    /// Overs as a decimal fraction of six balls (3.4 notation → 3.666...).
    pub fn as_overs_fraction(self) -> f64 {
        self.balls as f64 / BALLS_PER_OVER as f64
    }
}

impl TryFrom<f64> for OversBowled {
    type Error = String;

    /// Parses `O.B` notation. The ball digit must be below six and the total
    /// must fit the ball counter.
    fn try_from(notation: f64) -> Result<Self, Self::Error> {
        if !notation.is_finite() || notation < 0.0 || notation > u32::MAX as f64 {
            return Err(format!("overs out of range: {}", notation));
        }
        let whole = notation.trunc() as u32;
        let part = (notation.fract() * 10.0).round() as u32;
        if part >= BALLS_PER_OVER {
            return Err(format!("invalid overs notation: {}", notation));
        }
        whole
            .checked_mul(BALLS_PER_OVER)
            .and_then(|balls| balls.checked_add(part))
            .map(Self::from_balls)
            .ok_or_else(|| format!("overs out of range: {}", notation))
    }
}

impl From<OversBowled> for f64 {
    fn from(overs: OversBowled) -> Self {
        overs.completed_overs() as f64 + overs.balls_in_over() as f64 / 10.0
    }
}

impl fmt::Display for OversBowled {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.completed_overs(), self.balls_in_over())
    }
}

/// Roster entry with the figures accumulated in the current match.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Player {
    pub id: String,
    pub name: String,

    // Batting
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub is_out: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub how_out: Option<WicketKind>,
    pub dots_face: u32,

    // Bowling
    pub wickets: u32,
    #[schemars(with = "f64")]
    pub overs_bowled: OversBowled,
    pub runs_conceded: u32,
    pub maidens: u32,
    pub dots_bowled: u32,
    pub wides_conceded: u32,
    pub no_balls_conceded: u32,
}

impl Player {
    /// Fresh roster entry with zeroed figures.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), ..Default::default() }
    }

    pub fn has_bowled(&self) -> bool {
        self.overs_bowled.balls() > 0
    }

    /// Player-of-the-match weighting: runs plus a fixed value per wicket.
    pub fn impact_score(&self, wicket_weight: u32) -> u32 {
        self.runs + self.wickets * wicket_weight
    }
}
