//! Engine configuration: the recognized tuning options and nothing else.
//!
//! There is no config file, environment variable, or CLI surface; hosts
//! construct the struct directly or parse an embedded TOML snippet.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunables for the resolution engine. Defaults mirror the host-page script
/// constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Pause between two fetches, in milliseconds. Larger values put less
    /// pressure on the site and are less likely to trip risk control.
    pub load_interval_ms: u64,
    /// Extra wait after load completion, giving the client-side framework
    /// time to mount the upload grid before extraction.
    pub render_settle_ms: u64,
    /// Upper bound on waiting for load completion.
    pub navigation_timeout_ms: u64,
    /// Diagnostic-logging toggle; feeds the default log filter and has no
    /// effect on resolution behavior.
    pub debug: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            load_interval_ms: 1500,
            render_settle_ms: 1000,
            navigation_timeout_ms: 15_000,
            debug: true,
        }
    }
}

impl ResolverConfig {
    /// Parse options from a TOML snippet; missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load_interval(&self) -> Duration {
        Duration::from_millis(self.load_interval_ms)
    }

    pub fn render_settle(&self) -> Duration {
        Duration::from_millis(self.render_settle_ms)
    }

    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_millis(self.navigation_timeout_ms)
    }
}
