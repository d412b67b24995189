//! Resolver facade: cache policy, breaker short-circuit, provenance.
//!
//! The sole entry point for collaborators. Callers may invoke `resolve`
//! concurrently from independent tasks in any order; serialization against
//! the navigation surface is the queue's job, not theirs.

use std::sync::{Arc, Mutex};

use crate::breaker::CircuitBreaker;
use crate::cache::OutcomeCache;
use crate::config::ResolverConfig;
use crate::entity::{self, EntityId};
use crate::outcome::{FailureReason, Outcome, Provenance, Resolution};
use crate::queue::{FetchTiming, ResolutionQueue};
use crate::surface::NavigationSurface;

/// One engine instance per page session, owning its cache and breaker.
/// Independent instances share nothing.
pub struct Resolver<S> {
    queue: ResolutionQueue<S>,
    breaker: Arc<CircuitBreaker>,
    cache: Mutex<OutcomeCache>,
}

impl<S: NavigationSurface> Resolver<S> {
    pub fn new(surface: S, cfg: &ResolverConfig) -> Self {
        let breaker = Arc::new(CircuitBreaker::new());
        Self {
            queue: ResolutionQueue::new(
                surface,
                Arc::clone(&breaker),
                FetchTiming::from_config(cfg),
            ),
            breaker,
            cache: Mutex::new(OutcomeCache::new()),
        }
    }

    /// Resolves the latest upload instant for one creator.
    ///
    /// Cached successes and terminal failures short-circuit; a cached
    /// retryable failure is provisional and triggers a fresh fetch. Always
    /// completes with a well-formed `Resolution` — no failure escapes as an
    /// error.
    pub async fn resolve(&self, id: &EntityId) -> Resolution {
        let cached = self.cache.lock().unwrap().get(id).copied();

        if let Some(outcome @ Outcome::Resolved(_)) = cached {
            return Resolution {
                outcome,
                provenance: Provenance::Cached,
            };
        }

        if self.breaker.is_open() {
            // Cache untouched: retryable entries stay eligible should the
            // breaker ever be external and resettable.
            return Resolution {
                outcome: Outcome::Failed(FailureReason::CircuitOpen),
                provenance: Provenance::Blocked,
            };
        }

        if let Some(outcome @ Outcome::Failed(reason)) = cached {
            if reason.is_terminal() {
                return Resolution {
                    outcome,
                    provenance: Provenance::Cached,
                };
            }
            tracing::debug!(entity = %id, ?reason, "retrying after retryable failure");
        }

        let url = entity::upload_page_url(id);
        let outcome = self.queue.fetch(&url).await;

        if outcome.reason() == Some(FailureReason::CircuitOpen) {
            // Short-circuited while waiting for the surface; nothing ran and
            // nothing is recorded.
            return Resolution {
                outcome,
                provenance: Provenance::Blocked,
            };
        }

        tracing::debug!(entity = %id, ?outcome, "attempt completed");
        self.cache.lock().unwrap().put(id.clone(), outcome);
        Resolution {
            outcome,
            provenance: Provenance::Fresh,
        }
    }

    /// True once the session-wide breaker has latched.
    pub fn is_blocked(&self) -> bool {
        self.breaker.is_open()
    }

    /// Last recorded outcome for an entity, if any attempt completed.
    pub fn cached_outcome(&self, id: &EntityId) -> Option<Outcome> {
        self.cache.lock().unwrap().get(id).copied()
    }
}
