// ── Core error types ──
//
// User-facing errors from facilis-core. Consumers never see HTTP
// status codes or raw response bodies directly -- the
// `From<facilis_api::Error>` impl translates wire-layer errors into
// domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach the portal at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Portal request to {url} timed out")]
    Timeout { url: String },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Building not found: {identifier}")]
    BuildingNotFound { identifier: String },

    #[error("{resource} response was malformed: {message}")]
    MalformedResponse {
        resource: &'static str,
        message: String,
    },

    /// A record violated a model invariant (e.g. a zone with zero or
    /// two parents).
    #[error("Invalid record: {message}")]
    InvalidRecord { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("Portal error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ── Conversion from wire-layer errors ────────────────────────────────

impl CoreError {
    /// Translate an api error, attributing shape failures to `resource`.
    pub(crate) fn from_api(err: facilis_api::Error, resource: &'static str) -> Self {
        match err {
            facilis_api::Error::Transport(ref e) => {
                let url = || {
                    e.url()
                        .map_or_else(|| "<unknown>".into(), ToString::to_string)
                };
                if e.is_timeout() {
                    CoreError::Timeout { url: url() }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: url(),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            facilis_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            facilis_api::Error::Api { status, message } => CoreError::Api {
                message,
                status: Some(status),
            },
            facilis_api::Error::ShapeMismatch { message, body: _ } => CoreError::MalformedResponse {
                resource,
                message,
            },
        }
    }
}

impl From<facilis_api::Error> for CoreError {
    fn from(err: facilis_api::Error) -> Self {
        Self::from_api(err, "portal")
    }
}
