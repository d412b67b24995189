//! Serialized fetch attempts against the shared navigation surface.
//!
//! One attempt at a time: a mutex guards the surface slot, a cooldown stamp
//! paces successive attempts, and the load wait races a bounded timeout.
//! Single-flight plus mandatory pacing is the primary defense against the
//! site's abuse detection; the breaker is the fallback for when that still
//! fails.

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use tokio::sync::Mutex;
use tokio::time::{self, Instant};

use crate::breaker::{self, CircuitBreaker};
use crate::config::ResolverConfig;
use crate::extract;
use crate::outcome::{classify_navigate_error, FailureReason, Outcome};
use crate::page::RenderedDoc;
use crate::surface::NavigationSurface;

/// Fixed delays for one attempt, derived from `ResolverConfig`.
#[derive(Debug, Clone, Copy)]
pub struct FetchTiming {
    /// Pause between two attempts, whatever their outcome.
    pub load_interval: Duration,
    /// Wait after load completion before snapshotting the document.
    pub render_settle: Duration,
    /// Upper bound on waiting for load completion.
    pub navigation_timeout: Duration,
}

impl FetchTiming {
    pub fn from_config(cfg: &ResolverConfig) -> Self {
        Self {
            load_interval: cfg.load_interval(),
            render_settle: cfg.render_settle(),
            navigation_timeout: cfg.navigation_timeout(),
        }
    }
}

struct SurfaceSlot<S> {
    surface: S,
    /// Earliest moment the next attempt may start navigating. Stamped at the
    /// end of every attempt, success or failure, so the fetch rate stays
    /// bounded on all paths.
    cooldown_until: Option<Instant>,
}

/// Serializes fetch attempts: at most one holds the surface, and successive
/// holders are paced by the load interval.
pub struct ResolutionQueue<S> {
    slot: Mutex<SurfaceSlot<S>>,
    breaker: Arc<CircuitBreaker>,
    timing: FetchTiming,
}

impl<S: NavigationSurface> ResolutionQueue<S> {
    pub fn new(surface: S, breaker: Arc<CircuitBreaker>, timing: FetchTiming) -> Self {
        Self {
            slot: Mutex::new(SurfaceSlot {
                surface,
                cooldown_until: None,
            }),
            breaker,
            timing,
        }
    }

    /// Runs one serialized fetch attempt for `url`.
    ///
    /// Never returns an error: every failure mode maps to a reason. Answers
    /// `CircuitOpen` without touching the surface when the breaker is open
    /// on entry or trips while this request waits for the slot.
    pub async fn fetch(&self, url: &str) -> Outcome {
        if self.breaker.is_open() {
            return Outcome::Failed(FailureReason::CircuitOpen);
        }

        let mut slot = self.slot.lock().await;
        if self.breaker.is_open() {
            return Outcome::Failed(FailureReason::CircuitOpen);
        }
        if let Some(ready) = slot.cooldown_until {
            time::sleep_until(ready).await;
        }

        let outcome = attempt(&mut slot.surface, url, self.timing, &self.breaker).await;
        slot.cooldown_until = Some(Instant::now() + self.timing.load_interval);
        outcome
    }
}

async fn attempt<S: NavigationSurface>(
    surface: &mut S,
    url: &str,
    timing: FetchTiming,
    breaker: &CircuitBreaker,
) -> Outcome {
    tracing::debug!(url, "navigating");

    match time::timeout(timing.navigation_timeout, surface.navigate(url)).await {
        Err(_) => {
            tracing::warn!(url, "navigation timed out");
            Outcome::Failed(FailureReason::NavigationTimeout)
        }
        Ok(Err(e)) => {
            tracing::warn!(url, error = %e, "navigation failed");
            Outcome::Failed(classify_navigate_error(&e))
        }
        Ok(Ok(())) => {
            // Load completion signals document readiness, not framework
            // rendering; give the upload grid time to mount.
            time::sleep(timing.render_settle).await;
            match surface.document().await {
                Err(e) => {
                    tracing::warn!(url, error = %e, "snapshot failed");
                    Outcome::Failed(FailureReason::LoadError)
                }
                Ok(html) => complete(RenderedDoc::new(html), breaker),
            }
        }
    }
}

fn complete(doc: RenderedDoc, breaker: &CircuitBreaker) -> Outcome {
    // Block detection runs before extraction: a block page must trip the
    // breaker even though nothing on it parses.
    if breaker::page_is_blocked(&doc) {
        breaker.trip();
        tracing::warn!("block page detected, halting all further navigation");
        return Outcome::Failed(FailureReason::RiskBlocked);
    }

    let now = Local::now().naive_local();
    match extract::extract_latest(&doc, now) {
        Some(instant) => Outcome::Resolved(instant),
        None => Outcome::Failed(FailureReason::ParseFailed),
    }
}
