//! Record matching for basic (free text) and advanced (facet filter) mode.

use common::{facet_record::FacetRecord, facet_schema::FacetSchema, search_query::{SearchMode, SearchQuery}};

mod basic_match;
pub use basic_match::BasicMatcher;

mod advanced_match;
pub use advanced_match::{AdvancedMatcher, FacetConstraint};


/// Matcher for one [`SearchQuery`] snapshot. Build it once, then test as many records as needed.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordMatcher {
    Basic(BasicMatcher),
    Advanced(AdvancedMatcher),
}

impl RecordMatcher {
    pub fn new(schema: &FacetSchema, query: &SearchQuery) -> Self {
        match query.mode {
            SearchMode::Basic => RecordMatcher::Basic(BasicMatcher::new(&query.query_string)),
            SearchMode::Advanced => RecordMatcher::Advanced(AdvancedMatcher::new(schema, &query.active_filters)),
        }
    }

    pub fn matches<R: FacetRecord + ?Sized>(&self, record: &R) -> bool {
        match self {
            RecordMatcher::Basic(m) => m.matches(record),
            RecordMatcher::Advanced(m) => m.matches(record),
        }
    }
}

/// Records matching `query`, in input order.
pub fn filter_records<'a, R: FacetRecord>(records: &'a [R], schema: &FacetSchema, query: &SearchQuery) -> Vec<&'a R> {
    let matcher = RecordMatcher::new(schema, query);
    records.iter().filter(|r| matcher.matches(*r)).collect()
}

/// Indices of the records matching `query`, ascending.
pub fn matching_indices<R: FacetRecord>(records: &[R], schema: &FacetSchema, query: &SearchQuery) -> Vec<usize> {
    let matcher = RecordMatcher::new(schema, query);
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| matcher.matches(*r))
        .map(|(i, _)| i)
        .collect()
}
