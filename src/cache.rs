//! Session-scoped outcome cache.
//!
//! Keyed by entity id, last write wins. Created empty with the engine and
//! dropped with it; nothing persists across sessions.

use std::collections::HashMap;

use crate::entity::EntityId;
use crate::outcome::Outcome;

#[derive(Debug, Default)]
pub struct OutcomeCache {
    entries: HashMap<EntityId, Outcome>,
}

impl OutcomeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &EntityId) -> Option<&Outcome> {
        self.entries.get(id)
    }

    /// Overwrites unconditionally; a completed attempt always supersedes the
    /// previous outcome for the same entity.
    pub fn put(&mut self, id: EntityId, outcome: Outcome) {
        self.entries.insert(id, outcome);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
