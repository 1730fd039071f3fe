// ── Input sanitizing ──

/// Split raw comma-separated text into usernames.
///
/// Pieces are trimmed and empty ones dropped. Order and case are kept,
/// duplicates are not removed.
pub fn sanitize(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_empty_segments() {
        assert_eq!(sanitize(" g964 ,  , jhoffner "), vec!["g964", "jhoffner"]);
    }

    #[test]
    fn empty_inputs_yield_nothing() {
        assert!(sanitize("").is_empty());
        assert!(sanitize(",,,").is_empty());
        assert!(sanitize("  ,\t, ").is_empty());
    }

    #[test]
    fn keeps_duplicates_order_and_case() {
        assert_eq!(sanitize("B,a,B"), vec!["B", "a", "B"]);
    }

    #[test]
    fn inner_whitespace_is_kept() {
        assert_eq!(sanitize("two words"), vec!["two words"]);
    }
}
