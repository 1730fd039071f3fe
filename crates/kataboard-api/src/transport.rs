// Transport configuration for building reqwest::Client instances.
//
// Keeps timeout and user-agent settings in one place so the CLI and
// tests build clients the same way.

use std::time::Duration;

use crate::error::Error;

/// Default user agent sent with every profile request.
pub const DEFAULT_USER_AGENT: &str = concat!("kataboard/", env!("CARGO_PKG_VERSION"));

/// Transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.into(),
        }
    }
}

impl TransportConfig {
    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .build()
            .map_err(|e| Error::Client(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = TransportConfig::default();
        assert_eq!(cfg.timeout, Duration::from_secs(30));
        assert!(cfg.user_agent.starts_with("kataboard/"));
    }

    #[test]
    fn builder_overrides() {
        let cfg = TransportConfig::default()
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("test-agent");
        assert_eq!(cfg.timeout, Duration::from_secs(5));
        assert_eq!(cfg.user_agent, "test-agent");
        assert!(cfg.build_client().is_ok());
    }
}
