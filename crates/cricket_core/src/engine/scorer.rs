//! Copy-on-write entry points.
//!
//! Every operation borrows the current match and returns a new one. Nothing
//! is written back on rejection, and every accepted mutation leaves one undo
//! snapshot of the state it started from.

use tracing::{info, warn};

use super::config::ScoringConfig;
use super::controller::{self, MatchResult};
use super::history;
use super::resolution::{self, BallOutcome};
use crate::error::{Result, ScoringError};
use crate::models::{BallInput, Match, MatchSetup, Player};

#[derive(Debug, Clone, Default)]
pub struct Scorer {
    config: ScoringConfig,
}

impl Scorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn create_match(&self, setup: &MatchSetup) -> Result<Match> {
        controller::new_match(setup).map_err(rejected("create_match"))
    }

    pub fn resolve_ball(&self, m: &Match, ball: BallInput) -> Result<BallOutcome> {
        let mut next = m.clone();
        let signals =
            resolution::apply_ball(&mut next, &ball).map_err(rejected("resolve_ball"))?;
        history::record(&mut next, m, self.config.history_capacity)?;
        Ok(BallOutcome { state: next, signals })
    }

    pub fn assign_bowler(&self, m: &Match, bowler_id: &str) -> Result<Match> {
        self.mutate(m, "assign_bowler", |next| controller::assign_bowler(next, bowler_id))
    }

    pub fn start_second_innings(&self, m: &Match) -> Result<Match> {
        self.mutate(m, "start_second_innings", controller::start_second_innings)
    }

    pub fn bring_in_batter(&self, m: &Match, incoming_id: &str) -> Result<Match> {
        self.mutate(m, "bring_in_batter", |next| controller::bring_in_batter(next, incoming_id))
    }

    pub fn rename_player(&self, m: &Match, player_id: &str, name: &str) -> Result<Match> {
        self.mutate(m, "rename_player", |next| {
            if next.is_completed() {
                return Err(ScoringError::MatchCompleted);
            }
            let name = name.trim();
            if name.is_empty() {
                return Err(ScoringError::InvalidSetup("player name must not be empty".into()));
            }
            let player = [&mut next.team_a, &mut next.team_b]
                .into_iter()
                .find_map(|team| team.player_mut(player_id))
                .ok_or_else(|| ScoringError::UnknownPlayer { player_id: player_id.to_string() })?;
            player.name = name.to_string();
            Ok(())
        })
    }

    /// Append a player to `team_id`. Without a name the player is called
    /// "<team> Player N", N being the new roster size.
    pub fn add_player(&self, m: &Match, team_id: &str, name: Option<&str>) -> Result<Match> {
        self.mutate(m, "add_player", |next| {
            if next.is_completed() {
                return Err(ScoringError::MatchCompleted);
            }
            let team = next
                .team_mut(team_id)
                .ok_or_else(|| ScoringError::UnknownTeam { team_id: team_id.to_string() })?;
            let name = match name.map(str::trim) {
                Some(n) if !n.is_empty() => n.to_string(),
                _ => format!("{} Player {}", team.name, team.players.len() + 1),
            };
            let player = Player::new(uuid::Uuid::new_v4().to_string(), name);
            info!(team = %team.name, player = %player.name, "player added");
            team.players.push(player);
            Ok(())
        })
    }

    pub fn undo(&self, m: &Match) -> Result<Match> {
        history::undo(m)
    }

    pub fn compute_result(&self, m: &Match) -> MatchResult {
        controller::compute_result(m, self.config.player_of_match_wicket_weight)
    }

    fn mutate<F>(&self, m: &Match, op: &'static str, apply: F) -> Result<Match>
    where
        F: FnOnce(&mut Match) -> Result<()>,
    {
        let mut next = m.clone();
        apply(&mut next).map_err(rejected(op))?;
        history::record(&mut next, m, self.config.history_capacity)?;
        Ok(next)
    }
}

fn rejected(op: &'static str) -> impl Fn(ScoringError) -> ScoringError {
    move |err| {
        if err.is_rejection() {
            warn!(op, %err, "operation rejected");
        }
        err
    }
}
