//! Shared search query models.

use serde::{Deserialize, Serialize};

use crate::active_filter::ActiveFilters;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// One free-text query matched against every field of a record.
    Basic,
    /// Facet filters, AND across facets and OR within a facet.
    #[default]
    Advanced,
}


/// Snapshot of what the record list should be narrowed by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchQuery {
    pub mode: SearchMode,
    pub query_string: String,
    pub active_filters: ActiveFilters,
}

impl SearchQuery {
    pub fn basic(query_string: impl Into<String>) -> Self {
        Self { mode: SearchMode::Basic, query_string: query_string.into(), active_filters: ActiveFilters::new() }
    }

    pub fn advanced(active_filters: ActiveFilters) -> Self {
        Self { mode: SearchMode::Advanced, query_string: String::new(), active_filters }
    }
}
