//! The session's navigational memory.
//!
//! [`SessionState`] remembers what the last lookup returned, which
//! result is currently selected, and the selection's fetched episode
//! list. It is mutated only by the command handlers; the REPL owns a
//! single instance for the lifetime of the session.

use crate::error::{MedzError, Result};
use crate::model::{Episode, ItemDetails, SearchResult};

#[derive(Debug, Default)]
pub struct SessionState {
    results: Vec<SearchResult>,
    selection: Option<ItemDetails>,
    episodes: Vec<Episode>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears everything back to the just-started state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Replaces the result list wholesale. A new lookup also drops the
    /// current selection: keeping it addressable would let episode
    /// commands act on an item no longer on screen.
    pub fn record_lookup(&mut self, results: Vec<SearchResult>) {
        self.results = results;
        self.selection = None;
        self.episodes.clear();
    }

    pub fn record_selection(&mut self, details: ItemDetails) {
        self.selection = Some(details);
        self.episodes.clear();
    }

    pub fn record_episodes(&mut self, episodes: Vec<Episode>) {
        self.episodes = episodes;
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    pub fn current_selection(&self) -> Result<&ItemDetails> {
        self.selection.as_ref().ok_or(MedzError::NoSelection)
    }
}
