// kataboard-api: Async Rust client for the Codewars public users API

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::{CodewarsClient, DEFAULT_BASE_URL};
pub use error::Error;
pub use models::{CodeChallenges, RankInfo, Ranks, UserRecord};
pub use transport::TransportConfig;
