//! Latest-instant extraction from a rendered upload page.

use chrono::NaiveDateTime;

use crate::page::RenderedDoc;
use crate::timetext;

/// Returns the most recent instant among all parseable item timestamps on
/// the page.
///
/// `None` covers both "no timestamp elements rendered" and "none parsed".
/// Callers must treat it as a parse failure (retryable), never as proof the
/// creator has no uploads.
pub fn extract_latest(doc: &RenderedDoc, now: NaiveDateTime) -> Option<NaiveDateTime> {
    doc.timestamp_texts()
        .iter()
        .filter_map(|text| timetext::parse_time_text(text, now))
        .max()
}
