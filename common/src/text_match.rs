//! Case-insensitive text helpers used by suggestion search and matching.

/// Lower-cases `text` for comparisons.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Case-insensitive substring test. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    fold_case(haystack).contains(&fold_case(needle))
}

/// Same as [`contains_ignore_case`], for a needle that was already folded.
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    if folded_needle.is_empty() {
        return true;
    }
    fold_case(haystack).contains(folded_needle)
}

pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    a == b || fold_case(a) == fold_case(b)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_needle_matches_anything() {
        assert!(contains_ignore_case("Enclosure", ""));
        assert!(contains_ignore_case("", ""));
    }

    #[test]
    fn substring_ignores_case() {
        assert!(contains_ignore_case("Storage Zone A", "zone a"));
        assert!(contains_ignore_case("bp_tnk_1", "BP_TNK"));
        assert!(!contains_ignore_case("BP_PMP_3", "bp_tnk"));
    }

    #[test]
    fn equality_ignores_case() {
        assert!(equals_ignore_case("Active", "active"));
        assert!(!equals_ignore_case("Active", "Inactive"));
    }
}
