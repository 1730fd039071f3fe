//! Leaderboard command handler.

use tabled::Tabled;
use tracing::debug;

use kataboard_core::{Category, Feedback, Leaderboard, LeaderboardRow, Render, UserFetcher};

use crate::cli::RankArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct RankRow {
    #[tabled(rename = "#")]
    position: String,
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Clan")]
    clan: String,
    #[tabled(rename = "Score")]
    score: i64,
}

fn rows(board: &Leaderboard) -> Vec<RankRow> {
    let winner = board.winner_index();
    board
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| RankRow {
            position: if Some(i) == winner {
                format!("{} ★", i + 1)
            } else {
                (i + 1).to_string()
            },
            username: row.username.clone(),
            clan: row.clan.clone(),
            score: row.score,
        })
        .collect()
}

fn detail(board: &Leaderboard, color: bool) -> String {
    let title = format!("{} leaderboard", util::display_category(board.category.as_str()));
    if board.is_empty() {
        return format!("{title}\n\nNobody holds a rank in this category.");
    }

    let mut out = format!("{title}\n{}", output::render_table(&rows(board)));
    if let Some(LeaderboardRow { username, score, .. }) = board.winner() {
        let line = format!("Top: {username} ({score})");
        out.push('\n');
        out.push_str(&output::highlight(&line, color));
    }
    out
}

fn usernames(board: &Leaderboard) -> String {
    board
        .rows
        .iter()
        .map(|r| r.username.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    fetcher: &UserFetcher,
    args: &RankArgs,
    settings: &Settings,
) -> Result<(), CliError> {
    let (session, mut renders) = util::search(fetcher, &args.users.raw(), settings).await?;

    if let Some(ref language) = args.language {
        let category: Category = language.parse()?;
        debug!(%category, "switching category");
        let available = session.categories().join(", ");
        let (_, changed) = session.handle_category_change(category);
        for render in &changed {
            if let Render::Feedback(Feedback::UnknownCategory { category }) = render {
                return Err(CliError::UnknownCategory {
                    category: category.clone(),
                    available,
                });
            }
        }
        renders = changed;
    }

    let Some(board) = util::last_leaderboard(&renders) else {
        return Ok(());
    };

    let out = output::render_single(
        settings.output,
        board,
        |b| detail(b, settings.color),
        usernames,
    )?;
    output::print_output(&out, settings.quiet);
    Ok(())
}
