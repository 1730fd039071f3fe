//! Shared helpers for command handlers.

use kataboard_core::{Feedback, Leaderboard, Render, Session, UserFetcher};
use tracing::debug;

use crate::config::Settings;
use crate::error::CliError;
use crate::output;

/// Run a search and turn its feedback into warnings or errors.
///
/// Partial failures are printed as warnings; a search that produced no
/// users at all becomes an error carrying the feedback text.
pub async fn search(
    fetcher: &UserFetcher,
    raw: &str,
    settings: &Settings,
) -> Result<(Session, Vec<Render>), CliError> {
    let (session, renders) = Session::new().handle_search(raw, fetcher).await;
    debug!(renders = renders.len(), "search finished");

    for render in &renders {
        let Render::Feedback(feedback) = render else {
            continue;
        };
        match feedback {
            Feedback::EmptyInput => return Err(CliError::EmptyInput),
            Feedback::ConnectivityLost => {
                return Err(CliError::ConnectivityLost {
                    url: settings.fetcher.base_url.clone(),
                });
            }
            Feedback::Failures(report) if session.users().is_empty() => {
                return Err(CliError::NoUsersFound {
                    details: report.to_string(),
                });
            }
            other => output::print_warning(&other.to_string(), settings.quiet, settings.color),
        }
    }

    Ok((session, renders))
}

/// The most recent leaderboard among `renders`.
pub fn last_leaderboard(renders: &[Render]) -> Option<&Leaderboard> {
    renders.iter().rev().find_map(|r| match r {
        Render::Leaderboard(board) => Some(board),
        _ => None,
    })
}

/// Capitalize the first character of a category for display.
pub fn display_category(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
