// ── Leaderboard projection ──
//
// Rows are recomputed from the fetched records on every call; nothing is
// cached between selections.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use kataboard_api::UserRecord;

use crate::error::CoreError;

/// The category sentinel for the overall score.
pub const OVERALL: &str = "overall";

/// Clan shown for users without one.
pub const NO_CLAN: &str = "No Clan";

/// Which score a leaderboard ranks by.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Overall,
    /// Lowercase language key, e.g. `"javascript"`.
    Language(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Overall => OVERALL,
            Self::Language(lang) => lang,
        }
    }

    /// Score of `record` in this category, if it has one.
    pub fn score_of(&self, record: &UserRecord) -> Option<i64> {
        match self {
            Self::Overall => record.overall_score(),
            Self::Language(lang) => record.language_score(lang),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        match key.as_str() {
            "" => Err(CoreError::ValidationFailed {
                message: "category must not be empty".into(),
            }),
            OVERALL => Ok(Self::Overall),
            _ => Ok(Self::Language(key)),
        }
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One displayed leaderboard line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardRow {
    pub username: String,
    pub clan: String,
    pub score: i64,
}

/// Rank `records` by `category`, highest score first.
///
/// Records without a score in the category are left out. For a language
/// that is a filter on the language map; for `Overall` it only drops
/// profiles that carry no overall rank at all. Equal scores keep their
/// input order.
pub fn project(records: &[UserRecord], category: &Category) -> Vec<LeaderboardRow> {
    let mut rows: Vec<LeaderboardRow> = records
        .iter()
        .filter_map(|record| {
            let score = category.score_of(record)?;
            Some(LeaderboardRow {
                username: record.username.clone(),
                clan: record.clan_name().unwrap_or(NO_CLAN).to_owned(),
                score,
            })
        })
        .collect();
    rows.sort_by(|a, b| b.score.cmp(&a.score));
    rows
}

/// A projected leaderboard and the category it was projected for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leaderboard {
    pub category: Category,
    pub rows: Vec<LeaderboardRow>,
}

impl Leaderboard {
    pub fn new(records: &[UserRecord], category: Category) -> Self {
        let rows = project(records, &category);
        Self { category, rows }
    }

    /// Index of the highlighted top row.
    pub fn winner_index(&self) -> Option<usize> {
        (!self.rows.is_empty()).then_some(0)
    }

    pub fn winner(&self) -> Option<&LeaderboardRow> {
        self.rows.first()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
