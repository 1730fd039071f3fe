//! Category listing handler.

use serde::Serialize;
use tabled::Tabled;

use kataboard_core::{Category, Session, UserFetcher, project};

use crate::cli::UsersArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

/// One selectable category and how many fetched users rank in it.
#[derive(Debug, Serialize)]
struct CategoryEntry {
    category: String,
    ranked: usize,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Ranked Users")]
    ranked: usize,
}

impl From<&CategoryEntry> for CategoryRow {
    fn from(e: &CategoryEntry) -> Self {
        Self {
            category: util::display_category(&e.category),
            ranked: e.ranked,
        }
    }
}

fn entries(session: &Session) -> Vec<CategoryEntry> {
    session
        .categories()
        .into_iter()
        .map(|name| {
            let category: Category = name.parse().unwrap_or_default();
            let ranked = project(session.users(), &category).len();
            CategoryEntry {
                category: name,
                ranked,
            }
        })
        .collect()
}

pub async fn handle(
    fetcher: &UserFetcher,
    args: &UsersArgs,
    settings: &Settings,
) -> Result<(), CliError> {
    let (session, _) = util::search(fetcher, &args.raw(), settings).await?;
    let entries = entries(&session);

    let out = output::render_list(
        settings.output,
        &entries,
        |e| CategoryRow::from(e),
        |e| e.category.clone(),
    )?;
    output::print_output(&out, settings.quiet);
    Ok(())
}
