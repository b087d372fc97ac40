//! Undo stack.
//!
//! Each entry is the JSON of a pre-mutation state with its own history
//! stripped, so snapshots never nest. The stack lives on the match itself,
//! newest last, and is bounded; the oldest entry falls off first.

use tracing::{debug, info};

use crate::error::Result;
use crate::models::Match;

/// Record `before` as the undo point of `after`.
///
/// `after` must be a working copy derived from `before`; its history is
/// rebuilt from `before.history` plus the new snapshot.
pub fn record(after: &mut Match, before: &Match, capacity: usize) -> Result<()> {
    if capacity == 0 {
        after.history.clear();
        return Ok(());
    }

    let snapshot = serde_json::to_string(&before.without_history())?;
    let mut history = before.history.clone();
    history.push(snapshot);
    if history.len() > capacity {
        let overflow = history.len() - capacity;
        history.drain(..overflow);
    }
    after.history = history;
    debug!(depth = after.history.len(), "history snapshot recorded");
    Ok(())
}

/// Revert exactly one recorded step. An empty stack gives back an unchanged
/// copy.
pub fn undo(m: &Match) -> Result<Match> {
    let Some((latest, remaining)) = m.history.split_last() else {
        debug!(match_id = %m.id, "nothing to undo");
        return Ok(m.clone());
    };

    let mut restored: Match = serde_json::from_str(latest)?;
    restored.history = remaining.to_vec();
    info!(match_id = %m.id, depth = restored.history.len(), "undo");
    Ok(restored)
}

pub fn depth(m: &Match) -> usize {
    m.history.len()
}
