//! Free-text matching across all fields of a record.

use common::{facet_record::FacetRecord, text_match::{contains_folded, fold_case}};


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicMatcher {
    folded_query: String,
}

impl BasicMatcher {
    pub fn new(query: &str) -> Self {
        Self { folded_query: fold_case(query) }
    }

    /// True when any field contains the query. An empty query matches every record.
    pub fn matches<R: FacetRecord + ?Sized>(&self, record: &R) -> bool {
        if self.folded_query.is_empty() {
            return true;
        }
        record.facet_entries().any(|(_, value)| contains_folded(&value, &self.folded_query))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn matches_whichever_field_contains_the_query() {
        let matcher = BasicMatcher::new("zone a");
        assert!(matcher.matches(&json!({"location": "Storage Zone A", "status": "Active"})));
        assert!(matcher.matches(&json!({"note": "moved to ZONE A yesterday"})));
        assert!(!matcher.matches(&json!({"location": "Zone B"})));
    }

    #[test]
    fn numbers_are_searched_as_text() {
        let matcher = BasicMatcher::new("42");
        assert!(matcher.matches(&json!({"slot": 1420})));
        assert!(!matcher.matches(&json!({"slot": 7})));
    }

    #[test]
    fn empty_query_matches_records_without_fields() {
        let matcher = BasicMatcher::new("");
        assert!(matcher.matches(&json!({})));
    }
}
