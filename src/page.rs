//! Rendered-page snapshot and text-level scanning heuristics.
//!
//! `RenderedDoc` wraps the HTML snapshot taken from the navigation surface
//! after the settle delay. The scans are deliberately text-level: the upload
//! page's markup is not a stable contract, so we match the same structural
//! cues a selector would without committing to a DOM model.

use once_cell::sync::Lazy;
use regex::Regex;

/// Class carried by an item's display-timestamp element on the upload page;
/// the time text sits in the first span inside it.
const SUBTITLE_CLASS: &str = "bili-video-card__subtitle";

static TIMESTAMP_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r#"(?s)class="[^"]*{}[^"]*".*?<span[^>]*>([^<]+)</span>"#,
        SUBTITLE_CLASS
    ))
    .unwrap()
});

static SCRIPT_OR_STYLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>|<style[^>]*>.*?</style>").unwrap());
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

/// Snapshot of the surface's rendered document.
#[derive(Debug, Clone)]
pub struct RenderedDoc {
    html: String,
}

impl RenderedDoc {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// Text of every element matching the item-timestamp pattern, in
    /// document order. Empty when the upload grid has not rendered yet or
    /// the layout changed under us.
    pub fn timestamp_texts(&self) -> Vec<String> {
        TIMESTAMP_SPAN
            .captures_iter(&self.html)
            .map(|c| c[1].trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Flattened text content with markup removed. Script and style bodies
    /// are dropped so code fragments cannot satisfy text probes.
    pub fn visible_text(&self) -> String {
        let without_blocks = SCRIPT_OR_STYLE.replace_all(&self.html, " ");
        let without_tags = TAG.replace_all(&without_blocks, " ");
        without_tags.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
