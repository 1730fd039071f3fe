// ── Language catalog ──

use std::collections::BTreeSet;

use kataboard_api::UserRecord;

use crate::leaderboard::OVERALL;

/// Every language any record holds a rank in, sorted, without duplicates.
pub fn unique_languages(records: &[UserRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(UserRecord::languages)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Selector entries: `"overall"` first, then the given languages.
pub fn categories(languages: &[String]) -> Vec<String> {
    std::iter::once(OVERALL.to_owned())
        .chain(languages.iter().filter(|l| *l != OVERALL).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use kataboard_api::{RankInfo, Ranks};
    use pretty_assertions::assert_eq;

    use super::*;

    fn user(name: &str, langs: &[&str]) -> UserRecord {
        let languages: BTreeMap<String, RankInfo> = langs
            .iter()
            .map(|l| ((*l).to_owned(), RankInfo::default()))
            .collect();
        UserRecord {
            username: name.into(),
            ranks: Some(Ranks {
                overall: None,
                languages,
            }),
            ..UserRecord::default()
        }
    }

    #[test]
    fn merges_sorts_and_dedups() {
        let records = vec![
            user("a", &["python", "javascript"]),
            user("b", &["ruby", "javascript"]),
        ];
        assert_eq!(
            unique_languages(&records),
            vec!["javascript", "python", "ruby"]
        );
    }

    #[test]
    fn records_without_languages_contribute_nothing() {
        let bare = UserRecord {
            username: "bare".into(),
            ..UserRecord::default()
        };
        assert!(unique_languages(std::slice::from_ref(&bare)).is_empty());
        assert_eq!(
            unique_languages(&[bare, user("c", &["go"])]),
            vec!["go"]
        );
    }

    #[test]
    fn output_is_strictly_ascending() {
        let records = vec![
            user("a", &["z", "m", "a"]),
            user("b", &["m", "b"]),
            user("c", &["a"]),
        ];
        let langs = unique_languages(&records);
        assert!(langs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn overall_is_listed_first() {
        let langs = vec!["go".to_owned(), "rust".to_owned()];
        assert_eq!(categories(&langs), vec!["overall", "go", "rust"]);
        assert_eq!(categories(&[]), vec!["overall"]);
    }
}
