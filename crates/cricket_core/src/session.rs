//! A match being scored on one device.
//!
//! The session is the single mutator of its match. Each accepted operation
//! is saved locally (history included) before it becomes current, then the
//! history-free snapshot is offered to the sync sink, if any.

use thiserror::Error;
use tracing::{debug, warn};

use crate::analysis::{innings_card, InningsCard, LiveFigures, MatchSummaryInput};
use crate::engine::{BallSignals, MatchResult, Scorer};
use crate::error::ScoringError;
use crate::models::{BallInput, InningsNumber, Match, MatchSetup};
use crate::save::{MatchStore, SaveError, SyncSink};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error(transparent)]
    Save(#[from] SaveError),
}

pub type SessionResult<T> = std::result::Result<T, SessionError>;

pub struct ScoringSession<S: MatchStore> {
    scorer: Scorer,
    store: S,
    sink: Option<Box<dyn SyncSink>>,
    current: Match,
}

impl<S: MatchStore> ScoringSession<S> {
    pub fn start(scorer: Scorer, mut store: S, setup: &MatchSetup) -> SessionResult<Self> {
        let current = scorer.create_match(setup)?;
        store.save(&current)?;
        Ok(Self { scorer, store, sink: None, current })
    }

    pub fn resume(scorer: Scorer, store: S, match_id: &str) -> SessionResult<Self> {
        let current = store.load(match_id)?;
        debug!(match_id, depth = current.history.len(), "session resumed");
        Ok(Self { scorer, store, sink: None, current })
    }

    pub fn with_sink(mut self, sink: Box<dyn SyncSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn current(&self) -> &Match {
        &self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn record_ball(&mut self, ball: BallInput) -> SessionResult<BallSignals> {
        let outcome = self.scorer.resolve_ball(&self.current, ball)?;
        self.commit(outcome.state)?;
        Ok(outcome.signals)
    }

    pub fn assign_bowler(&mut self, bowler_id: &str) -> SessionResult<()> {
        let next = self.scorer.assign_bowler(&self.current, bowler_id)?;
        self.commit(next)
    }

    pub fn bring_in_batter(&mut self, incoming_id: &str) -> SessionResult<()> {
        let next = self.scorer.bring_in_batter(&self.current, incoming_id)?;
        self.commit(next)
    }

    pub fn start_second_innings(&mut self) -> SessionResult<()> {
        let next = self.scorer.start_second_innings(&self.current)?;
        self.commit(next)
    }

    pub fn rename_player(&mut self, player_id: &str, name: &str) -> SessionResult<()> {
        let next = self.scorer.rename_player(&self.current, player_id, name)?;
        self.commit(next)
    }

    pub fn add_player(&mut self, team_id: &str, name: Option<&str>) -> SessionResult<()> {
        let next = self.scorer.add_player(&self.current, team_id, name)?;
        self.commit(next)
    }

    pub fn undo(&mut self) -> SessionResult<()> {
        let previous = self.scorer.undo(&self.current)?;
        self.commit(previous)
    }

    pub fn result(&self) -> MatchResult {
        self.scorer.compute_result(&self.current)
    }

    pub fn live(&self) -> LiveFigures {
        LiveFigures::of(&self.current)
    }

    pub fn card(&self, number: InningsNumber) -> Option<InningsCard> {
        innings_card(&self.current, number)
    }

    pub fn summary(&self) -> MatchSummaryInput {
        MatchSummaryInput::of(&self.current, self.scorer.config().player_of_match_wicket_weight)
    }

    fn commit(&mut self, next: Match) -> SessionResult<()> {
        self.store.save(&next)?;
        self.current = next;

        if let Some(sink) = self.sink.as_mut() {
            if let Err(err) = sink.publish(&self.current.without_history()) {
                warn!(match_id = %self.current.id, %err, "remote sync failed");
            }
        }
        Ok(())
    }
}
