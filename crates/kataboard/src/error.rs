//! CLI error types with miette diagnostics.
//!
//! Maps core, config, and fetch-outcome failures into user-facing errors
//! with actionable help text and process exit codes.

use miette::Diagnostic;
use thiserror::Error;

use kataboard_config::ConfigError;
use kataboard_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const API: i32 = 5;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Input ────────────────────────────────────────────────────────

    #[error("Please enter at least one username.")]
    #[diagnostic(
        code(kataboard::empty_input),
        help("Pass usernames separated by commas or spaces, e.g. kataboard rank g964,jhoffner")
    )]
    EmptyInput,

    #[error("None of the fetched users has a rank in '{category}'")]
    #[diagnostic(
        code(kataboard::unknown_category),
        help("Available categories: {available}")
    )]
    UnknownCategory { category: String, available: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(kataboard::validation))]
    Validation { field: String, reason: String },

    // ── Fetching ─────────────────────────────────────────────────────

    #[error("Something went wrong. Please check your internet connection.")]
    #[diagnostic(
        code(kataboard::connection_failed),
        help("No profile could be reached at {url}. Check the network or --api-url.")
    )]
    ConnectivityLost { url: String },

    #[error("No users could be loaded")]
    #[diagnostic(code(kataboard::no_users), help("{details}"))]
    NoUsersFound { details: String },

    #[error("User '{username}' not found")]
    #[diagnostic(
        code(kataboard::not_found),
        help("Usernames are case-sensitive; check the spelling on codewars.com")
    )]
    UserNotFound { username: String },

    #[error("The profile service returned an error for '{username}'")]
    #[diagnostic(
        code(kataboard::api_error),
        help("The service may be rate limiting or down; try again shortly.")
    )]
    ApiError { username: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Configuration file already exists at {path}")]
    #[diagnostic(code(kataboard::config_exists), help("Use --force to overwrite it."))]
    ConfigExists { path: String },

    #[error(transparent)]
    #[diagnostic(code(kataboard::config))]
    Config(Box<ConfigError>),

    #[error(transparent)]
    #[diagnostic(code(kataboard::core))]
    Core(#[from] CoreError),

    // ── Serialization ────────────────────────────────────────────

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::Config(Box::new(other)),
        }
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::EmptyInput
            | Self::UnknownCategory { .. }
            | Self::Validation { .. }
            | Self::Core(CoreError::ValidationFailed { .. }) => exit_code::USAGE,
            Self::ConnectivityLost { .. } => exit_code::CONNECTION,
            Self::NoUsersFound { .. } | Self::UserNotFound { .. } => exit_code::NOT_FOUND,
            Self::ApiError { .. } => exit_code::API,
            _ => exit_code::GENERAL,
        }
    }
}
