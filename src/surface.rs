//! Navigation surface seam.
//!
//! The engine drives an isolated, same-origin browsing context (a hidden
//! iframe in the host page), but only through this trait, so hosts and
//! tests supply their own surface. The queue guarantees at most one
//! in-flight navigation per surface.

use async_trait::async_trait;
use thiserror::Error;

/// Failure signals a surface can report back to the queue.
#[derive(Debug, Error)]
pub enum NavigateError {
    /// The surface signalled a load failure for the target URL.
    #[error("load failed: {0}")]
    LoadFailed(String),
    /// The surface itself is broken (detached, crashed, snapshot refused).
    #[error("surface unavailable: {0}")]
    Unavailable(String),
}

/// Isolated browsing context pointed at one URL at a time.
///
/// `navigate` resolves at load completion (or load error). Load completion
/// signals document readiness, not framework rendering — the queue sleeps
/// the settle delay and then calls `document` for the rendered snapshot.
#[async_trait]
pub trait NavigationSurface: Send {
    async fn navigate(&mut self, url: &str) -> Result<(), NavigateError>;

    /// Snapshot of the currently rendered document.
    async fn document(&mut self) -> Result<String, NavigateError>;
}
