use thiserror::Error;

/// Top-level error type for the `kataboard-api` crate.
///
/// Covers every failure mode of a single profile lookup: transport,
/// URL construction, HTTP status, and body decoding. `kataboard-core`
/// classifies these into fetch outcomes.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, body read, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The configured base URL cannot carry path segments (e.g. `mailto:`).
    #[error("Base URL cannot be used as a profile endpoint: {0}")]
    CannotBeABase(String),

    /// Building the underlying `reqwest::Client` failed.
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    // ── HTTP status ─────────────────────────────────────────────────
    /// The service answered 404 for this username.
    #[error("User '{username}' not found")]
    NotFound { username: String },

    /// Any other non-success status.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the username does not exist at the service.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if no usable response was obtained at all.
    ///
    /// Body decoding failures count as transport failures: the response
    /// arrived but could not be turned into a profile.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Deserialization { .. })
    }

    /// HTTP status carried by this error, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_reports_404() {
        let err = Error::NotFound {
            username: "ghost".into(),
        };
        assert!(err.is_not_found());
        assert!(!err.is_transport());
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "User 'ghost' not found");
    }

    #[test]
    fn deserialization_counts_as_transport() {
        let err = Error::Deserialization {
            message: "expected value".into(),
            body: "<html>".into(),
        };
        assert!(err.is_transport());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn api_error_keeps_status() {
        let err = Error::Api {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert!(!err.is_not_found());
        assert_eq!(err.status(), Some(503));
    }
}
