//! Facet schema: the filterable columns of a filtering session.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::facet_value::FacetValue;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FacetKind {
    /// Free text, matched as a substring.
    #[default]
    Text,
    /// Picked from a list of values, matched by equality.
    Select,
}

/// A filterable column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub kind: FacetKind,
    /// Static options of a `Select` facet. Empty when values come from a provider or from the rows.
    #[serde(default)]
    pub options: Vec<FacetValue>,
    #[serde(default)]
    pub multi_value: bool,
    #[serde(default)]
    pub preferred: bool,
    /// Facets that cannot be picked while this one has an active filter.
    #[serde(default)]
    pub excludes: BTreeSet<String>,
    /// Passed through to hosts that localize labels, never interpreted here.
    #[serde(default)]
    pub translate: bool,
}

impl Facet {
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: FacetKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            options: vec![],
            multi_value: false,
            preferred: false,
            excludes: BTreeSet::new(),
            translate: false,
        }
    }

    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FacetKind::Text)
    }

    pub fn select(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FacetKind::Select)
    }

    pub fn with_options<V: Into<FacetValue>>(mut self, options: impl IntoIterator<Item = V>) -> Self {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn multi(mut self) -> Self {
        self.multi_value = true;
        self
    }

    pub fn preferred(mut self) -> Self {
        self.preferred = true;
        self
    }

    pub fn excluding(mut self, keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.excludes.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn translated(mut self) -> Self {
        self.translate = true;
        self
    }

    pub fn is_select(&self) -> bool {
        self.kind == FacetKind::Select
    }

    pub fn has_static_options(&self) -> bool {
        !self.options.is_empty()
    }

    pub fn excludes_key(&self, key: &str) -> bool {
        self.excludes.contains(key)
    }
}


/// Ordered snapshot of the facets. Replaced as a whole when a new schema arrives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "Vec<Facet>", into = "Vec<Facet>")]
pub struct FacetSchema {
    facets: Vec<Facet>,
}

impl FacetSchema {
    /// Builds a schema, keeping the first facet for any repeated key.
    pub fn new(facets: Vec<Facet>) -> Self {
        let mut seen = BTreeSet::new();
        let facets = facets.into_iter().filter(|f| seen.insert(f.key.clone())).collect();
        Self { facets }
    }

    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Facet> {
        self.facets.iter()
    }

    pub fn get(&self, key: &str) -> Option<&Facet> {
        self.facets.iter().find(|f| f.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.facets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Chip label for `key`, falling back to the key itself.
    pub fn label_for<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).map(|f| f.label.as_str()).unwrap_or(key)
    }
}

impl From<Vec<Facet>> for FacetSchema {
    fn from(facets: Vec<Facet>) -> Self {
        FacetSchema::new(facets)
    }
}

impl From<FacetSchema> for Vec<Facet> {
    fn from(schema: FacetSchema) -> Self {
        schema.facets
    }
}

impl<'a> IntoIterator for &'a FacetSchema {
    type Item = &'a Facet;
    type IntoIter = std::slice::Iter<'a, Facet>;

    fn into_iter(self) -> Self::IntoIter {
        self.facets.iter()
    }
}
