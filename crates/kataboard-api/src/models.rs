// Wire types for the Codewars `/users/{username}` endpoint.
//
// Every field past `username` is optional on the wire: the profile
// endpoint omits or nulls fields freely, and a missing field is a valid
// state, not a decode error.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A public user profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub honor: Option<i64>,
    #[serde(default)]
    pub clan: Option<String>,
    #[serde(default)]
    pub leaderboard_position: Option<u64>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub ranks: Option<Ranks>,
    #[serde(default)]
    pub code_challenges: Option<CodeChallenges>,
}

impl UserRecord {
    /// Overall rank score, if the profile carries one.
    pub fn overall_score(&self) -> Option<i64> {
        self.ranks.as_ref()?.overall.as_ref().map(|r| r.score)
    }

    /// Score for a single language key (lowercase, e.g. `"python"`).
    pub fn language_score(&self, language: &str) -> Option<i64> {
        self.ranks.as_ref()?.languages.get(language).map(|r| r.score)
    }

    /// Language keys this user holds a rank in.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.ranks
            .iter()
            .flat_map(|r| r.languages.keys().map(String::as_str))
    }

    /// Clan name, treating blank strings as no clan.
    pub fn clan_name(&self) -> Option<&str> {
        self.clan.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }
}

/// Overall and per-language ranks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ranks {
    #[serde(default)]
    pub overall: Option<RankInfo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: BTreeMap<String, RankInfo>,
}

/// One rank entry (`{"rank": -3, "name": "3 kyu", "color": "blue", "score": 2116}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankInfo {
    #[serde(default, deserialize_with = "lenient_integer")]
    pub rank: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String,
    /// Fractional scores are rounded to the nearest integer.
    #[serde(default, deserialize_with = "lenient_integer")]
    pub score: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeChallenges {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_authored: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_completed: u64,
}

// ── Lenient field decoders ──────────────────────────────────────────

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept any JSON number (or null) where an integer is expected.
#[allow(clippy::as_conversions, clippy::cast_possible_truncation)]
fn lenient_integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(0);
    };
    if let Some(n) = number.as_i64() {
        return Ok(n);
    }
    number
        .as_f64()
        .filter(|f| f.is_finite())
        .map(|f| f.round() as i64)
        .ok_or_else(|| D::Error::custom(format!("number {number} does not fit a score")))
}
