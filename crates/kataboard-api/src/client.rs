// Codewars users API client
//
// Wraps `reqwest::Client` with profile URL templating and status
// classification. One GET per username; the caller decides what to do
// with each failure.

use reqwest::StatusCode;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::UserRecord;
use crate::transport::TransportConfig;

/// Public profile endpoint. Usernames are appended as a single path segment.
pub const DEFAULT_BASE_URL: &str = "https://www.codewars.com/api/v1/users/";

/// Raw HTTP client for the Codewars users endpoint.
#[derive(Debug, Clone)]
pub struct CodewarsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CodewarsClient {
    /// Create a client from a base URL string and a `TransportConfig`.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, http)
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::CannotBeABase(base_url.to_string()));
        }
        Ok(Self { http, base_url })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `<base>/<username>` with the username escaped as one segment.
    pub fn user_url(&self, username: &str) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::CannotBeABase(self.base_url.to_string()))?
            .pop_if_empty()
            .push(username);
        Ok(url)
    }

    /// Fetch one public profile.
    ///
    /// 404 maps to `Error::NotFound`, any other non-2xx status to
    /// `Error::Api`. A 2xx body that is not a profile maps to
    /// `Error::Deserialization`.
    pub async fn get_user(&self, username: &str) -> Result<UserRecord, Error> {
        let url = self.user_url(username)?;
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        let status = resp.status();

        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound {
                username: username.to_owned(),
            });
        }

        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown").to_owned(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;
        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}
