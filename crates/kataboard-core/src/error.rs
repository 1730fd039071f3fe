// ── Core error types ──
//
// Fetch failures never surface here: they are folded into
// `FetchOutcome::Failure`. What remains are construction and input
// validation problems the caller has to fix.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<kataboard_api::Error> for CoreError {
    fn from(err: kataboard_api::Error) -> Self {
        match err {
            kataboard_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            kataboard_api::Error::CannotBeABase(url) => CoreError::Config {
                message: format!("Base URL cannot carry a username: {url}"),
            },
            kataboard_api::Error::Client(message) => CoreError::Config { message },
            other => CoreError::Internal(other.to_string()),
        }
    }
}
