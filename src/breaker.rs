//! Risk-control detection and the session-wide fetch latch.
//!
//! The source site answers over-eager clients with an interstitial block
//! page instead of the upload grid. Detection is a fixed-marker probe over
//! the page's visible text; the markup and exact wording are not a stable
//! contract, so a site rewording can produce false negatives. Accepted
//! limitation.

use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::page::RenderedDoc;

/// Error code the block page displays. Matched as a standalone token so
/// digit runs elsewhere on the page (view counts etc.) cannot trip it.
static BLOCK_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b412\b").unwrap());

/// Policy-rejection phrases, Chinese and English variants.
const BLOCK_PHRASES: [&str; 2] = ["安全风控策略", "security control policy"];

/// True when the rendered page is the risk-control interstitial rather than
/// an upload grid.
pub fn page_is_blocked(doc: &RenderedDoc) -> bool {
    let text = doc.visible_text();
    BLOCK_CODE.is_match(&text) || BLOCK_PHRASES.iter().any(|p| text.contains(p))
}

/// One-way latch: once a block page has been seen, no further navigation is
/// attempted for the rest of the session. There is no reset.
#[derive(Debug, Default)]
pub struct CircuitBreaker {
    open: AtomicBool,
}

impl CircuitBreaker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch open. Idempotent.
    pub fn trip(&self) {
        self.open.store(true, Ordering::Release);
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }
}
