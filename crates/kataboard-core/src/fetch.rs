// ── Profile fetching ──
//
// `UserFetcher::fetch_one` is total: every failure path is folded into a
// `FetchOutcome::Failure`, so the batch layer above never handles errors.

use futures_util::future::join_all;
use serde::Serialize;
use strum::{Display, IntoStaticStr};
use tracing::{debug, info, warn};

use kataboard_api::{CodewarsClient, UserRecord};

use crate::config::FetcherConfig;
use crate::error::CoreError;

/// Why a single profile lookup failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FailureKind {
    /// The service answered 404.
    NotFound,
    /// The service answered with any other non-success status.
    ApiError,
    /// No usable response was obtained.
    NetworkError,
}

impl FailureKind {
    /// Classify an API error.
    pub fn classify(err: &kataboard_api::Error) -> Self {
        if err.is_not_found() {
            Self::NotFound
        } else if err.status().is_some() && !err.is_transport() {
            Self::ApiError
        } else {
            Self::NetworkError
        }
    }
}

/// Result of one lookup. The identifier is present on both arms.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Success {
        identifier: String,
        record: UserRecord,
    },
    Failure {
        identifier: String,
        kind: FailureKind,
    },
}

impl FetchOutcome {
    pub fn identifier(&self) -> &str {
        match self {
            Self::Success { identifier, .. } | Self::Failure { identifier, .. } => identifier,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Failure { kind, .. } => Some(*kind),
            Self::Success { .. } => None,
        }
    }

    pub fn record(&self) -> Option<&UserRecord> {
        match self {
            Self::Success { record, .. } => Some(record),
            Self::Failure { .. } => None,
        }
    }
}

/// A failed identifier together with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedFetch {
    pub identifier: String,
    pub kind: FailureKind,
}

/// Split outcomes into fetched records and failures, both in input order.
pub fn partition(outcomes: Vec<FetchOutcome>) -> (Vec<UserRecord>, Vec<FailedFetch>) {
    let mut records = Vec::new();
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            FetchOutcome::Success { record, .. } => records.push(record),
            FetchOutcome::Failure { identifier, kind } => {
                failures.push(FailedFetch { identifier, kind });
            }
        }
    }
    (records, failures)
}

/// Fetches profiles and classifies every failure.
#[derive(Debug, Clone)]
pub struct UserFetcher {
    client: CodewarsClient,
}

impl UserFetcher {
    /// Build a fetcher from a [`FetcherConfig`].
    pub fn new(config: &FetcherConfig) -> Result<Self, CoreError> {
        let client = CodewarsClient::new(&config.base_url, &config.transport())?;
        Ok(Self { client })
    }

    /// Wrap an already-built API client.
    pub fn from_client(client: CodewarsClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &CodewarsClient {
        &self.client
    }

    /// Fetch one profile. Never fails; failures come back as outcomes.
    pub async fn fetch_one(&self, identifier: &str) -> FetchOutcome {
        match self.client.get_user(identifier).await {
            Ok(record) => {
                debug!(identifier, "profile fetched");
                FetchOutcome::Success {
                    identifier: identifier.to_owned(),
                    record,
                }
            }
            Err(e) => {
                let kind = FailureKind::classify(&e);
                warn!(identifier, kind = %kind, error = %e, "profile fetch failed");
                FetchOutcome::Failure {
                    identifier: identifier.to_owned(),
                    kind,
                }
            }
        }
    }

    /// Fetch every identifier concurrently.
    ///
    /// All requests start at once with no cap. The returned outcomes line
    /// up with `identifiers` regardless of completion order.
    pub async fn fetch_all(&self, identifiers: &[String]) -> Vec<FetchOutcome> {
        let outcomes = join_all(identifiers.iter().map(|id| self.fetch_one(id))).await;

        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        info!(
            requested = identifiers.len(),
            succeeded,
            failed = outcomes.len() - succeeded,
            "batch fetch complete"
        );
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(id: &str, kind: FailureKind) -> FetchOutcome {
        FetchOutcome::Failure {
            identifier: id.into(),
            kind,
        }
    }

    fn success(id: &str) -> FetchOutcome {
        FetchOutcome::Success {
            identifier: id.into(),
            record: UserRecord {
                username: id.into(),
                ..UserRecord::default()
            },
        }
    }

    #[test]
    fn failure_kind_codes() {
        assert_eq!(FailureKind::NotFound.to_string(), "not_found");
        assert_eq!(FailureKind::ApiError.to_string(), "api_error");
        let code: &'static str = FailureKind::NetworkError.into();
        assert_eq!(code, "network_error");
    }

    #[test]
    fn classify_api_errors() {
        let not_found = kataboard_api::Error::NotFound {
            username: "x".into(),
        };
        let api = kataboard_api::Error::Api {
            status: 502,
            message: "Bad Gateway".into(),
        };
        let bad_body = kataboard_api::Error::Deserialization {
            message: "eof".into(),
            body: String::new(),
        };
        assert_eq!(FailureKind::classify(&not_found), FailureKind::NotFound);
        assert_eq!(FailureKind::classify(&api), FailureKind::ApiError);
        assert_eq!(FailureKind::classify(&bad_body), FailureKind::NetworkError);
    }

    #[test]
    fn outcome_accessors() {
        let ok = success("a");
        let bad = failure("b", FailureKind::NotFound);
        assert_eq!(ok.identifier(), "a");
        assert_eq!(bad.identifier(), "b");
        assert!(ok.is_success());
        assert_eq!(ok.failure_kind(), None);
        assert_eq!(bad.failure_kind(), Some(FailureKind::NotFound));
        assert!(bad.record().is_none());
    }

    #[test]
    fn partition_keeps_order() {
        let (records, failures) = partition(vec![
            success("a"),
            failure("b", FailureKind::NotFound),
            success("c"),
            failure("d", FailureKind::ApiError),
        ]);
        let names: Vec<_> = records.iter().map(|r| r.username.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(
            failures,
            vec![
                FailedFetch {
                    identifier: "b".into(),
                    kind: FailureKind::NotFound
                },
                FailedFetch {
                    identifier: "d".into(),
                    kind: FailureKind::ApiError
                },
            ]
        );
    }
}
