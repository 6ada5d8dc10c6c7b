//! Selectable facet values.

use serde::{Deserialize, Serialize};

use crate::text_match::contains_folded;


/// One selectable value of a facet. `id` identifies it, `value` is what the user sees and what
/// records are compared against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FacetValue {
    pub id: String,
    pub value: String,
}

impl FacetValue {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self { id: id.into(), value: value.into() }
    }

    /// A value whose id is the value itself.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self { id: value.clone(), value }
    }

    /// `folded_query` must already be lower-cased.
    pub fn matches_folded_query(&self, folded_query: &str) -> bool {
        contains_folded(&self.value, folded_query)
    }
}

impl From<&str> for FacetValue {
    fn from(value: &str) -> Self {
        FacetValue::plain(value)
    }
}

impl From<String> for FacetValue {
    fn from(value: String) -> Self {
        FacetValue::plain(value)
    }
}

impl From<(&str, &str)> for FacetValue {
    fn from((id, value): (&str, &str)) -> Self {
        FacetValue::new(id, value)
    }
}

/// Pushes `value` unless a value with the same id is already present.
pub fn push_unique(values: &mut Vec<FacetValue>, value: FacetValue) -> bool {
    if values.iter().any(|v| v.id == value.id) {
        return false;
    }
    values.push(value);
    true
}
