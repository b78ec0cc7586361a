use thiserror::Error;

/// Top-level error type for the `facilis-api` crate.
///
/// Covers every failure mode at the wire boundary: transport, portal
/// API errors, and response bodies that match none of the tolerated
/// envelope shapes. `facilis-core` maps these into user-facing
/// diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Portal API ──────────────────────────────────────────────────
    /// Non-2xx response from the portal backend.
    #[error("Portal API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// Response body present but matching none of the tolerated
    /// envelope shapes, with the raw body for debugging.
    #[error("Response shape mismatch: {message}")]
    ShapeMismatch { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Api { status: 404, .. } => true,
            _ => false,
        }
    }
}
