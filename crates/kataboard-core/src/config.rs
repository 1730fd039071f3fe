// ── Fetcher configuration ──
//
// Built by the CLI from `kataboard-config`; the core never reads files
// or environment variables itself.

use std::time::Duration;

use kataboard_api::{DEFAULT_BASE_URL, TransportConfig};

/// Everything needed to construct a [`UserFetcher`](crate::UserFetcher).
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Profile endpoint; usernames are appended as one path segment.
    pub base_url: String,
    /// Per-request timeout applied by the HTTP client.
    pub timeout: Duration,
    /// Custom user agent, or the crate default when `None`.
    pub user_agent: Option<String>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout: Duration::from_secs(30),
            user_agent: None,
        }
    }
}

impl FetcherConfig {
    pub(crate) fn transport(&self) -> TransportConfig {
        let transport = TransportConfig::default().with_timeout(self.timeout);
        match self.user_agent {
            Some(ref agent) => transport.with_user_agent(agent.clone()),
            None => transport,
        }
    }
}
