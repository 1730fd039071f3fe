// kataboard-core: fetch pipeline and leaderboard projection between
// kataboard-api and the CLI.

pub mod catalog;
pub mod config;
pub mod error;
pub mod fetch;
pub mod input;
pub mod leaderboard;
pub mod session;

// ── Primary re-exports ──────────────────────────────────────────────
pub use catalog::{categories, unique_languages};
pub use config::FetcherConfig;
pub use error::CoreError;
pub use fetch::{FailedFetch, FailureKind, FetchOutcome, UserFetcher, partition};
pub use input::sanitize;
pub use leaderboard::{Category, Leaderboard, LeaderboardRow, NO_CLAN, OVERALL, project};
pub use session::{FailureReport, Feedback, Render, Session};

// Re-export the wire model so consumers need only this crate.
pub use kataboard_api::{RankInfo, Ranks, UserRecord};
