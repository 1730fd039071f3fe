// ── Session state ──
//
// The fetched users and the selected category live in one explicit value.
// Each handler consumes the current session plus an event and returns the
// next session together with what the renderer should show.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use kataboard_api::UserRecord;

use crate::catalog::{categories, unique_languages};
use crate::fetch::{FailedFetch, FailureKind, FetchOutcome, UserFetcher, partition};
use crate::input::sanitize;
use crate::leaderboard::{Category, Leaderboard};

/// One instruction for the rendering side.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Render {
    /// Drop any feedback left over from a previous search.
    ClearFeedback,
    /// Nothing to rank: hide the table and the category selector.
    HideLeaderboard,
    /// Selector entries, `"overall"` first.
    Categories(Vec<String>),
    Leaderboard(Leaderboard),
    Feedback(Feedback),
}

/// User-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Feedback {
    /// Nothing left after sanitizing; no request was made.
    EmptyInput,
    /// Every requested user failed with a network error.
    ConnectivityLost,
    /// Some users failed; grouped by reason.
    Failures(FailureReport),
    /// The selected language is not among the fetched users' languages.
    UnknownCategory { category: String },
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => f.write_str("Please enter at least one username."),
            Self::ConnectivityLost => {
                f.write_str("Something went wrong. Please check your internet connection.")
            }
            Self::Failures(report) => fmt::Display::fmt(report, f),
            Self::UnknownCategory { category } => {
                write!(f, "None of the fetched users has a rank in '{category}'.")
            }
        }
    }
}

/// Failed identifiers grouped by failure kind, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FailureReport {
    pub not_found: Vec<String>,
    pub api_error: Vec<String>,
    pub network_error: Vec<String>,
}

impl FailureReport {
    pub fn from_failures(failures: &[FailedFetch]) -> Self {
        let mut report = Self::default();
        for failure in failures {
            let group = match failure.kind {
                FailureKind::NotFound => &mut report.not_found,
                FailureKind::ApiError => &mut report.api_error,
                FailureKind::NetworkError => &mut report.network_error,
            };
            group.push(failure.identifier.clone());
        }
        report
    }

    pub fn len(&self) -> usize {
        self.not_found.len() + self.api_error.len() + self.network_error.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when all `submitted` identifiers failed and all failures are
    /// network errors.
    pub fn is_total_network_failure(&self, submitted: usize) -> bool {
        submitted > 0
            && self.network_error.len() == submitted
            && self.not_found.is_empty()
            && self.api_error.is_empty()
    }
}

impl fmt::Display for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups = [
            ("The following users could not be found", &self.not_found),
            ("The API returned an error for", &self.api_error),
            ("The following users could not be reached", &self.network_error),
        ];
        let mut first = true;
        for (label, names) in groups {
            if names.is_empty() {
                continue;
            }
            if !first {
                f.write_str("\n")?;
            }
            first = false;
            let quoted: Vec<String> = names.iter().map(|n| format!("\"{n}\"")).collect();
            write!(f, "{label}: {}", quoted.join(", "))?;
        }
        Ok(())
    }
}

/// Fetched users, the languages they rank in, and the current selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    users: Vec<UserRecord>,
    languages: Vec<String>,
    selected: Category,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn selected(&self) -> &Category {
        &self.selected
    }

    /// Selector entries for the current users.
    pub fn categories(&self) -> Vec<String> {
        categories(&self.languages)
    }

    /// The leaderboard for the current selection.
    pub fn leaderboard(&self) -> Leaderboard {
        Leaderboard::new(&self.users, self.selected.clone())
    }

    /// Sanitize `raw`, fetch every identifier, and replace the session.
    ///
    /// Empty input short-circuits before any request is made and leaves the
    /// session untouched.
    pub async fn handle_search(self, raw: &str, fetcher: &UserFetcher) -> (Self, Vec<Render>) {
        let identifiers = sanitize(raw);
        if identifiers.is_empty() {
            return (self, empty_input());
        }
        let outcomes = fetcher.fetch_all(&identifiers).await;
        self.apply_outcomes(&identifiers, outcomes)
    }

    /// Fold completed fetch outcomes for `identifiers` into a new session.
    pub fn apply_outcomes(
        self,
        identifiers: &[String],
        outcomes: Vec<FetchOutcome>,
    ) -> (Self, Vec<Render>) {
        if identifiers.is_empty() {
            return (self, empty_input());
        }

        let (users, failures) = partition(outcomes);
        let mut renders = vec![Render::ClearFeedback];

        let next = if users.is_empty() {
            renders.push(Render::HideLeaderboard);
            Self::default()
        } else {
            let next = Self {
                languages: unique_languages(&users),
                users,
                selected: Category::Overall,
            };
            renders.push(Render::Categories(next.categories()));
            renders.push(Render::Leaderboard(next.leaderboard()));
            next
        };

        if !failures.is_empty() {
            let report = FailureReport::from_failures(&failures);
            let feedback = if report.is_total_network_failure(identifiers.len()) {
                Feedback::ConnectivityLost
            } else {
                Feedback::Failures(report)
            };
            renders.push(Render::Feedback(feedback));
        }

        debug!(
            users = next.users.len(),
            languages = next.languages.len(),
            failed = failures.len(),
            "search applied"
        );
        (next, renders)
    }

    /// Switch the ranking category and re-project.
    ///
    /// A language no fetched user ranks in is rejected and the session is
    /// returned unchanged.
    pub fn handle_category_change(self, category: Category) -> (Self, Vec<Render>) {
        let unknown = match category {
            Category::Language(ref lang) if !self.languages.contains(lang) => Some(lang.clone()),
            _ => None,
        };
        if let Some(category) = unknown {
            let feedback = Feedback::UnknownCategory { category };
            return (self, vec![Render::Feedback(feedback)]);
        }

        let next = Self {
            selected: category,
            ..self
        };
        let board = next.leaderboard();
        (next, vec![Render::Leaderboard(board)])
    }
}

fn empty_input() -> Vec<Render> {
    vec![Render::ClearFeedback, Render::Feedback(Feedback::EmptyInput)]
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use kataboard_api::{RankInfo, Ranks};
    use pretty_assertions::assert_eq;

    use super::*;

    fn rank(score: i64) -> RankInfo {
        RankInfo {
            score,
            ..RankInfo::default()
        }
    }

    fn user(name: &str, overall: i64, langs: &[(&str, i64)]) -> UserRecord {
        UserRecord {
            username: name.into(),
            ranks: Some(Ranks {
                overall: Some(rank(overall)),
                languages: langs
                    .iter()
                    .map(|(l, s)| ((*l).to_owned(), rank(*s)))
                    .collect::<BTreeMap<_, _>>(),
            }),
            ..UserRecord::default()
        }
    }

    fn ok(record: UserRecord) -> FetchOutcome {
        FetchOutcome::Success {
            identifier: record.username.clone(),
            record,
        }
    }

    fn failed(id: &str, kind: FailureKind) -> FetchOutcome {
        FetchOutcome::Failure {
            identifier: id.into(),
            kind,
        }
    }

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_owned()).collect()
    }

    fn board_names(renders: &[Render]) -> Vec<String> {
        renders
            .iter()
            .find_map(|r| match r {
                Render::Leaderboard(board) => {
                    Some(board.rows.iter().map(|row| row.username.clone()).collect())
                }
                _ => None,
            })
            .unwrap_or_default()
    }

    fn feedback(renders: &[Render]) -> Option<&Feedback> {
        renders.iter().find_map(|r| match r {
            Render::Feedback(f) => Some(f),
            _ => None,
        })
    }

    #[test]
    fn empty_input_is_reported_without_touching_state() {
        let session = Session::new()
            .apply_outcomes(&ids(&["x"]), vec![ok(user("x", 1, &[]))])
            .0;
        let (after, renders) = session.clone().apply_outcomes(&[], Vec::new());
        assert_eq!(after, session);
        assert_eq!(feedback(&renders), Some(&Feedback::EmptyInput));
    }

    #[test]
    fn overall_then_language_selection() {
        let outcomes = vec![
            ok(user("UserA", 100, &[("javascript", 10)])),
            ok(user("UserB", 500, &[("javascript", 5)])),
        ];
        let (session, renders) =
            Session::new().apply_outcomes(&ids(&["UserA", "UserB"]), outcomes);

        assert_eq!(session.selected(), &Category::Overall);
        assert_eq!(board_names(&renders), vec!["UserB", "UserA"]);
        assert!(renders.contains(&Render::Categories(ids(&["overall", "javascript"]))));
        assert_eq!(feedback(&renders), None);

        let (session, renders) =
            session.handle_category_change(Category::Language("javascript".into()));
        assert_eq!(board_names(&renders), vec!["UserA", "UserB"]);
        assert_eq!(session.selected().as_str(), "javascript");
    }

    #[test]
    fn all_network_errors_collapse_to_one_message() {
        let names = ids(&["a", "b", "c"]);
        let outcomes = names
            .iter()
            .map(|n| failed(n, FailureKind::NetworkError))
            .collect();
        let (session, renders) = Session::new().apply_outcomes(&names, outcomes);

        assert!(session.users().is_empty());
        assert!(renders.contains(&Render::HideLeaderboard));
        assert_eq!(feedback(&renders), Some(&Feedback::ConnectivityLost));
    }

    #[test]
    fn mixed_failures_are_listed_by_kind() {
        let outcomes = vec![
            failed("ghost", FailureKind::NotFound),
            ok(user("real", 1, &[])),
            failed("flaky", FailureKind::NetworkError),
        ];
        let (_, renders) =
            Session::new().apply_outcomes(&ids(&["ghost", "real", "flaky"]), outcomes);

        let Some(Feedback::Failures(report)) = feedback(&renders) else {
            panic!("expected failure report, got {renders:?}");
        };
        assert_eq!(report.not_found, vec!["ghost"]);
        assert_eq!(report.network_error, vec!["flaky"]);
        assert_eq!(
            report.to_string(),
            "The following users could not be found: \"ghost\"\n\
             The following users could not be reached: \"flaky\""
        );
    }

    #[test]
    fn partial_network_failure_is_not_total() {
        let outcomes = vec![
            failed("a", FailureKind::NetworkError),
            failed("b", FailureKind::NotFound),
        ];
        let (_, renders) = Session::new().apply_outcomes(&ids(&["a", "b"]), outcomes);
        assert!(matches!(feedback(&renders), Some(Feedback::Failures(_))));
    }

    #[test]
    fn new_search_replaces_previous_users() {
        let (session, _) =
            Session::new().apply_outcomes(&ids(&["old"]), vec![ok(user("old", 1, &[("go", 1)]))]);
        let (session, _) = session.handle_category_change(Category::Language("go".into()));
        let (session, _) =
            session.apply_outcomes(&ids(&["new"]), vec![ok(user("new", 2, &[("c", 1)]))]);

        let names: Vec<_> = session.users().iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["new"]);
        assert_eq!(session.languages().to_vec(), vec!["c".to_owned()]);
        assert_eq!(session.selected(), &Category::Overall);
    }

    #[test]
    fn search_with_no_successes_clears_users() {
        let (session, _) =
            Session::new().apply_outcomes(&ids(&["old"]), vec![ok(user("old", 1, &[]))]);
        let (session, renders) =
            session.apply_outcomes(&ids(&["gone"]), vec![failed("gone", FailureKind::NotFound)]);
        assert!(session.users().is_empty());
        assert_eq!(renders[0], Render::ClearFeedback);
        assert_eq!(renders[1], Render::HideLeaderboard);
    }

    #[test]
    fn unknown_language_keeps_selection() {
        let (session, _) =
            Session::new().apply_outcomes(&ids(&["a"]), vec![ok(user("a", 1, &[("go", 3)]))]);
        let (after, renders) = session
            .clone()
            .handle_category_change(Category::Language("cobol".into()));
        assert_eq!(after, session);
        assert_eq!(
            feedback(&renders),
            Some(&Feedback::UnknownCategory {
                category: "cobol".into()
            })
        );
    }

    #[test]
    fn switching_back_to_overall() {
        let (session, _) = Session::new().apply_outcomes(
            &ids(&["a", "b"]),
            vec![ok(user("a", 9, &[("go", 1)])), ok(user("b", 3, &[("go", 8)]))],
        );
        let (session, _) = session.handle_category_change(Category::Language("go".into()));
        let (session, renders) = session.handle_category_change(Category::Overall);
        assert_eq!(session.selected(), &Category::Overall);
        assert_eq!(board_names(&renders), vec!["a", "b"]);
    }

    #[test]
    fn feedback_messages() {
        assert_eq!(
            Feedback::EmptyInput.to_string(),
            "Please enter at least one username."
        );
        assert_eq!(
            Feedback::ConnectivityLost.to_string(),
            "Something went wrong. Please check your internet connection."
        );
    }
}
