//! Single-profile command handler.

use kataboard_core::{FailureKind, FetchOutcome, UserFetcher, UserRecord, sanitize};

use crate::cli::UserArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

fn detail(u: &UserRecord) -> String {
    let mut lines = vec![
        format!("Username: {}", u.username),
        format!("Name:     {}", u.name.as_deref().unwrap_or("-")),
        format!("Clan:     {}", u.clan_name().unwrap_or("-")),
        format!(
            "Honor:    {}",
            u.honor.map_or_else(|| "-".into(), |h| h.to_string())
        ),
        format!(
            "Position: {}",
            u.leaderboard_position
                .map_or_else(|| "-".into(), |p| p.to_string())
        ),
    ];

    if let Some(overall) = u.ranks.as_ref().and_then(|r| r.overall.as_ref()) {
        lines.push(format!("Overall:  {} ({})", overall.name, overall.score));
    }

    if let Some(ranks) = u.ranks.as_ref().filter(|r| !r.languages.is_empty()) {
        lines.push("Languages:".into());
        for (lang, info) in &ranks.languages {
            lines.push(format!(
                "  {:<12} {:<7} {}",
                util::display_category(lang),
                info.name,
                info.score
            ));
        }
    }

    lines.join("\n")
}

pub async fn handle(
    fetcher: &UserFetcher,
    args: &UserArgs,
    settings: &Settings,
) -> Result<(), CliError> {
    let mut ids = sanitize(&args.username);
    let username = match (ids.pop(), ids.is_empty()) {
        (Some(name), true) => name,
        (None, _) => return Err(CliError::EmptyInput),
        (Some(_), false) => {
            return Err(CliError::Validation {
                field: "username".into(),
                reason: "expected a single username; use `kataboard rank` for several".into(),
            });
        }
    };

    let record = match fetcher.fetch_one(&username).await {
        FetchOutcome::Success { record, .. } => record,
        FetchOutcome::Failure { identifier, kind } => {
            return Err(match kind {
                FailureKind::NotFound => CliError::UserNotFound {
                    username: identifier,
                },
                FailureKind::ApiError => CliError::ApiError {
                    username: identifier,
                },
                FailureKind::NetworkError => CliError::ConnectivityLost {
                    url: settings.fetcher.base_url.clone(),
                },
            });
        }
    };

    let out = output::render_single(settings.output, &record, detail, |u| u.username.clone())?;
    output::print_output(&out, settings.quiet);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use kataboard_core::{RankInfo, Ranks};

    use super::*;

    #[test]
    fn detail_lists_profile_and_languages() {
        let record = UserRecord {
            username: "g964".into(),
            honor: Some(1000),
            clan: Some("  ".into()),
            ranks: Some(Ranks {
                overall: Some(RankInfo {
                    name: "1 kyu".into(),
                    score: 9000,
                    ..RankInfo::default()
                }),
                languages: BTreeMap::from([(
                    "python".to_owned(),
                    RankInfo {
                        name: "2 kyu".into(),
                        score: 4000,
                        ..RankInfo::default()
                    },
                )]),
            }),
            ..UserRecord::default()
        };

        let out = detail(&record);
        assert!(out.contains("Username: g964"));
        assert!(out.contains("Clan:     -"));
        assert!(out.contains("Honor:    1000"));
        assert!(out.contains("Overall:  1 kyu (9000)"));
        assert!(out.contains("Python"));
        assert!(out.contains("4000"));
    }

    #[test]
    fn detail_without_ranks_omits_sections() {
        let out = detail(&UserRecord {
            username: "new".into(),
            ..UserRecord::default()
        });
        assert!(!out.contains("Overall:"));
        assert!(!out.contains("Languages:"));
    }
}
