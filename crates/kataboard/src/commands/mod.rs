//! Command dispatch: bridges CLI args -> core session -> output formatting.

pub mod config_cmd;
pub mod languages;
pub mod rank;
pub mod user;
pub mod util;

use kataboard_core::UserFetcher;

use crate::cli::Command;
use crate::config::Settings;
use crate::error::CliError;

/// Dispatch a command that talks to the profile service.
pub async fn dispatch(
    cmd: Command,
    fetcher: &UserFetcher,
    settings: &Settings,
) -> Result<(), CliError> {
    match cmd {
        Command::Rank(args) => rank::handle(fetcher, &args, settings).await,
        Command::Languages(args) => languages::handle(fetcher, &args, settings).await,
        Command::User(args) => user::handle(fetcher, &args, settings).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
