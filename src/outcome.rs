//! Resolution outcomes, failure classification, and provenance tags.

use chrono::NaiveDateTime;

use crate::surface::NavigateError;

/// Why a fetch attempt produced no instant.
///
/// Retryable reasons are provisional: a later `resolve` for the same entity
/// runs a fresh fetch. Terminal reasons stick for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// Surface loaded but no timestamp could be extracted.
    ParseFailed,
    /// Surface did not finish loading within the navigation timeout.
    NavigationTimeout,
    /// Surface reported a load failure.
    NavigationError,
    /// Any other error during the attempt (snapshot refused, surface gone).
    LoadError,
    /// This fetch landed on the risk-control block page; trips the breaker.
    RiskBlocked,
    /// The breaker was already open; no fetch was attempted.
    CircuitOpen,
}

impl FailureReason {
    pub fn is_retryable(self) -> bool {
        matches!(
            self,
            FailureReason::ParseFailed
                | FailureReason::NavigationTimeout
                | FailureReason::NavigationError
                | FailureReason::LoadError
        )
    }

    pub fn is_terminal(self) -> bool {
        !self.is_retryable()
    }
}

/// Classify a surface error reported during navigation.
pub fn classify_navigate_error(e: &NavigateError) -> FailureReason {
    match e {
        NavigateError::LoadFailed(_) => FailureReason::NavigationError,
        NavigateError::Unavailable(_) => FailureReason::LoadError,
    }
}

/// Result of one completed resolution attempt: either the latest upload
/// instant or a classified failure, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Resolved(NaiveDateTime),
    Failed(FailureReason),
}

impl Outcome {
    pub fn instant(&self) -> Option<NaiveDateTime> {
        match self {
            Outcome::Resolved(t) => Some(*t),
            Outcome::Failed(_) => None,
        }
    }

    pub fn reason(&self) -> Option<FailureReason> {
        match self {
            Outcome::Resolved(_) => None,
            Outcome::Failed(r) => Some(*r),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Outcome::Resolved(_))
    }
}

/// Where a resolution's outcome came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Produced by a fetch attempt completed for this call.
    Fresh,
    /// Served from the session cache without touching the surface.
    Cached,
    /// Short-circuited because the breaker is open.
    Blocked,
}

/// Outcome plus provenance, as handed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub outcome: Outcome,
    pub provenance: Provenance,
}
