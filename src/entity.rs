//! Creator identifiers and upload-page URL derivation.

use std::fmt;

/// Host serving creator spaces; upload listings live at
/// `<base>/<id>/upload/video`.
const SPACE_BASE_URL: &str = "https://space.bilibili.com";

/// Opaque identifier of a followed creator (the numeric `mid` path segment
/// of their space URL). Stable for the session; used as the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// URL of the creator's public upload-listing page.
pub fn upload_page_url(id: &EntityId) -> String {
    format!("{}/{}/upload/video", SPACE_BASE_URL, id.as_str())
}
