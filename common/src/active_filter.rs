//! Committed facet filters.

use serde::{Deserialize, Serialize};

use crate::{facet_schema::FacetSchema, facet_value::{FacetValue, push_unique}, filter_group::FilterGroup};


/// The committed values of one facet. Values are unique by id and keep their commit order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilter {
    pub facet_key: String,
    pub values: Vec<FacetValue>,
}

impl ActiveFilter {
    pub fn new(facet_key: impl Into<String>, values: impl IntoIterator<Item = FacetValue>) -> Self {
        let mut unique = Vec::new();
        for value in values {
            push_unique(&mut unique, value);
        }
        Self { facet_key: facet_key.into(), values: unique }
    }

    pub fn single(facet_key: impl Into<String>, value: FacetValue) -> Self {
        Self { facet_key: facet_key.into(), values: vec![value] }
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.values.iter().any(|v| v.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}


/// The active filter set, at most one entry per facet key.
///
/// Entries are kept oldest first: replacing a facet's filter moves it to the end, so the last
/// entry is always the most recently committed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "Vec<ActiveFilter>", into = "Vec<ActiveFilter>")]
pub struct ActiveFilters {
    filters: Vec<ActiveFilter>,
}

impl ActiveFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, facet_key: &str) -> Option<&ActiveFilter> {
        self.filters.iter().find(|f| f.facet_key == facet_key)
    }

    pub fn contains_key(&self, facet_key: &str) -> bool {
        self.get(facet_key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.filters.iter().map(|f| f.facet_key.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ActiveFilter> {
        self.filters.iter()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Replaces the entry for `filter.facet_key`. An empty filter removes the facet instead.
    pub fn upsert(&mut self, filter: ActiveFilter) {
        self.remove(&filter.facet_key);
        if !filter.is_empty() {
            self.filters.push(filter);
        }
    }

    pub fn remove(&mut self, facet_key: &str) -> Option<ActiveFilter> {
        let index = self.filters.iter().position(|f| f.facet_key == facet_key)?;
        Some(self.filters.remove(index))
    }

    /// Removes one value from a facet, dropping the facet when nothing is left.
    pub fn remove_value(&mut self, facet_key: &str, value_id: &str) -> bool {
        let Some(index) = self.filters.iter().position(|f| f.facet_key == facet_key) else {
            return false;
        };
        let filter = &mut self.filters[index];
        let before = filter.values.len();
        filter.values.retain(|v| v.id != value_id);
        if filter.values.len() == before {
            return false;
        }
        if filter.values.is_empty() {
            self.filters.remove(index);
        }
        true
    }

    pub fn clear(&mut self) {
        self.filters.clear();
    }

    pub fn retain(&mut self, keep: impl FnMut(&ActiveFilter) -> bool) {
        self.filters.retain(keep);
    }

    /// Grouped display form, oldest first, labels taken from `schema`.
    pub fn groups(&self, schema: &FacetSchema) -> Vec<FilterGroup> {
        self.filters
            .iter()
            .map(|f| FilterGroup {
                facet_key: f.facet_key.clone(),
                label: schema.label_for(&f.facet_key).to_string(),
                values: f.values.iter().map(|v| v.value.clone()).collect(),
            })
            .collect()
    }
}

impl From<Vec<ActiveFilter>> for ActiveFilters {
    fn from(filters: Vec<ActiveFilter>) -> Self {
        let mut active = ActiveFilters::new();
        for filter in filters {
            active.upsert(filter);
        }
        active
    }
}

impl From<ActiveFilters> for Vec<ActiveFilter> {
    fn from(active: ActiveFilters) -> Self {
        active.filters
    }
}

impl<'a> IntoIterator for &'a ActiveFilters {
    type Item = &'a ActiveFilter;
    type IntoIter = std::slice::Iter<'a, ActiveFilter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}
