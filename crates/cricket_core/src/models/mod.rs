pub mod ball;
pub mod innings;
pub mod match_state;
pub mod over;
pub mod player;
pub mod setup;
pub mod team;

pub use ball::{
    BallInput, BallRecord, ExtraKind, WicketKind, BALLS_PER_OVER, MAX_RUNS_PER_BALL,
    WIDE_NO_BALL_PENALTY,
};
pub use innings::{Innings, InningsEndReason};
pub use match_state::{InningsNumber, Match, MatchStatus};
pub use over::Over;
pub use player::{OversBowled, Player};
pub use setup::{MatchMeta, MatchSetup, TeamSetup};
pub use team::Team;
