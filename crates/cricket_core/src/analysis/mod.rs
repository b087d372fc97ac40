//! # Analysis Module
//!
//! Read-only figures derived from a match snapshot for live views and
//! scorecards. Nothing here mutates a match.
//!
//! ## Submodules
//!
//! - `rates` - run rates, strike rate, economy, chase arithmetic
//! - `scorecard` - batting and bowling cards per innings
//! - `timeline` - over-by-over breakdown with ball notation
//! - `summary` - compact input for an external match-report writer

pub mod rates;
pub mod scorecard;
pub mod summary;
pub mod timeline;

pub use rates::{economy, strike_rate, LiveFigures};
pub use scorecard::{innings_card, BattingLine, BowlingLine, InningsCard};
pub use summary::{snapshot_schema, InningsSummary, MatchSummaryInput};
pub use timeline::{over_timeline, OverSummary};
