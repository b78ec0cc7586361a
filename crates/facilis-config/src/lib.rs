//! Shared configuration for Facilis consumers.
//!
//! TOML files layered with `FACILIS_`-prefixed environment variables,
//! validated and translated to `facilis_core::PortalConfig`.

use std::path::Path;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use facilis_core::PortalConfig;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Portal connection settings.
    #[serde(default)]
    pub portal: PortalSettings,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PortalSettings {
    /// Portal base URL (e.g. "https://facilities.example.edu/api").
    #[serde(default)]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Default page size for list views.
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
}

impl Default for PortalSettings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout: default_timeout(),
            page_limit: default_page_limit(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}
fn default_page_limit() -> u32 {
    facilis_core::DEFAULT_PAGE_LIMIT
}

// ── Loading ─────────────────────────────────────────────────────────

impl Config {
    /// Load from an optional TOML file layered under `FACILIS_*`
    /// environment variables (env wins).
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = file {
            figment = figment.merge(Toml::file(path));
        }
        let config: Self = figment
            .merge(Env::prefixed("FACILIS_").split("__"))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.portal.base_url.is_empty() {
            return Err(ConfigError::Validation {
                field: "portal.base_url".into(),
                reason: "must be set".into(),
            });
        }
        Url::parse(&self.portal.base_url).map_err(|e| ConfigError::Validation {
            field: "portal.base_url".into(),
            reason: e.to_string(),
        })?;
        if self.portal.page_limit == 0 {
            return Err(ConfigError::Validation {
                field: "portal.page_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Translate into the core crate's runtime config.
    pub fn to_portal_config(&self) -> PortalConfig {
        PortalConfig::new(self.portal.base_url.clone())
            .with_timeout(Duration::from_secs(self.portal.timeout))
            .with_page_limit(self.portal.page_limit)
    }
}
