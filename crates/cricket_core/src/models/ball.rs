use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Runs added to the total for a wide or a no-ball on top of anything run.
pub const WIDE_NO_BALL_PENALTY: u32 = 1;

/// Deliveries in a complete over.
pub const BALLS_PER_OVER: u32 = 6;

/// Most runs a single delivery can be scored for.
pub const MAX_RUNS_PER_BALL: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ExtraKind {
    Wide,
    NoBall,
    Bye,
    LegBye,
    Penalty,
}

impl ExtraKind {
    /// Wides and no-balls have to be bowled again.
    pub fn is_legal(self) -> bool {
        !matches!(self, ExtraKind::Wide | ExtraKind::NoBall)
    }

    pub fn penalty_runs(self) -> u32 {
        match self {
            ExtraKind::Wide | ExtraKind::NoBall => WIDE_NO_BALL_PENALTY,
            _ => 0,
        }
    }

    /// Byes and leg-byes are never charged to the bowler.
    pub fn charged_to_bowler(self) -> bool {
        !matches!(self, ExtraKind::Bye | ExtraKind::LegBye)
    }

    /// Only a no-ball still lets the batter score off the bat.
    pub fn credits_batter(self) -> bool {
        matches!(self, ExtraKind::NoBall)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum WicketKind {
    Bowled,
    Caught,
    Lbw,
    RunOut,
    Stumped,
    HitWicket,
    Retired,
}

impl WicketKind {
    pub fn credited_to_bowler(self) -> bool {
        !matches!(self, WicketKind::RunOut)
    }
}

/// Raw outcome of one delivery as entered by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BallInput {
    pub runs: u32,
    pub extra: Option<ExtraKind>,
    pub wicket: Option<WicketKind>,
}

impl BallInput {
    pub fn runs(runs: u32) -> Self {
        Self { runs, ..Default::default() }
    }

    pub fn extra(runs: u32, extra: ExtraKind) -> Self {
        Self { runs, extra: Some(extra), wicket: None }
    }

    pub fn wicket(wicket: WicketKind) -> Self {
        Self { runs: 0, extra: None, wicket: Some(wicket) }
    }

    pub fn with_wicket(mut self, wicket: WicketKind) -> Self {
        self.wicket = Some(wicket);
        self
    }

    pub fn is_legal(&self) -> bool {
        self.extra.map_or(true, ExtraKind::is_legal)
    }

    pub fn penalty_runs(&self) -> u32 {
        self.extra.map_or(0, ExtraKind::penalty_runs)
    }

    /// Everything this ball adds to the innings total.
    pub fn total_runs(&self) -> u32 {
        self.runs.saturating_add(self.penalty_runs())
    }

    pub fn runs_in_range(&self) -> bool {
        self.runs <= MAX_RUNS_PER_BALL
    }
}

/// A recorded delivery. Never edited after it has been appended to an over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BallRecord {
    pub runs: u32,
    pub is_extra: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_type: Option<ExtraKind>,
    pub is_wicket: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wicket_type: Option<WicketKind>,
    pub batsman_id: String,
    pub bowler_id: String,
}

impl BallRecord {
    pub fn new(input: &BallInput, batsman_id: &str, bowler_id: &str) -> Self {
        Self {
            runs: input.runs,
            is_extra: input.extra.is_some(),
            extra_type: input.extra,
            is_wicket: input.wicket.is_some(),
            wicket_type: input.wicket,
            batsman_id: batsman_id.to_string(),
            bowler_id: bowler_id.to_string(),
        }
    }

    pub fn input(&self) -> BallInput {
        BallInput { runs: self.runs, extra: self.extra_type, wicket: self.wicket_type }
    }

    pub fn is_legal(&self) -> bool {
        self.input().is_legal()
    }

    pub fn total_runs(&self) -> u32 {
        self.input().total_runs()
    }

    /// Runs this ball charges against the bowler's figures.
    pub fn bowler_runs(&self) -> u32 {
        match self.extra_type {
            Some(extra) if !extra.charged_to_bowler() => 0,
            _ => self.total_runs(),
        }
    }

    /// Short timeline notation: `W`, `2W`, `WD`, `NB`, `1B`, `2LB`, `4`.
    pub fn notation(&self) -> String {
        if self.is_wicket {
            return if self.runs > 0 { format!("{}W", self.runs) } else { "W".to_string() };
        }
        match self.extra_type {
            Some(ExtraKind::Wide) => "WD".to_string(),
            Some(ExtraKind::NoBall) => "NB".to_string(),
            Some(ExtraKind::Bye) => format!("{}B", self.runs),
            Some(ExtraKind::LegBye) => format!("{}LB", self.runs),
            _ => self.runs.to_string(),
        }
    }
}
