// ── Runtime configuration for the core layer ──
//
// `facilis-config` builds this from TOML profiles and environment
// variables; embedders can also construct it directly.

use std::time::Duration;

/// Connection settings for one portal backend.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Portal base URL (e.g. `https://facilities.example.edu/api`).
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Page size used by list sessions unless overridden.
    pub default_page_limit: u32,
}

impl PortalConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            default_page_limit: crate::session::DEFAULT_PAGE_LIMIT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_page_limit(mut self, limit: u32) -> Self {
        self.default_page_limit = limit;
        self
    }
}
