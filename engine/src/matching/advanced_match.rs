//! Facet filter matching: AND across facets, OR within a facet.

use common::{
    active_filter::ActiveFilters,
    facet_record::FacetRecord,
    facet_schema::{FacetKind, FacetSchema},
    text_match::fold_case,
};


/// The active values of one facet, folded for comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetConstraint {
    pub facet_key: String,
    pub kind: FacetKind,
    pub folded_values: Vec<String>,
}

impl FacetConstraint {
    /// A missing value never satisfies the constraint.
    pub fn accepts(&self, value: Option<&str>) -> bool {
        let Some(value) = value else {
            return false;
        };
        let value = fold_case(value);
        match self.kind {
            FacetKind::Select => self.folded_values.iter().any(|v| *v == value),
            FacetKind::Text => self.folded_values.iter().any(|v| value.contains(v.as_str())),
        }
    }
}


#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdvancedMatcher {
    constraints: Vec<FacetConstraint>,
}

impl AdvancedMatcher {
    /// Filters on keys missing from `schema` are ignored.
    pub fn new(schema: &FacetSchema, active: &ActiveFilters) -> Self {
        let constraints = active
            .iter()
            .filter(|filter| !filter.values.is_empty())
            .filter_map(|filter| {
                let facet = schema.get(&filter.facet_key)?;
                Some(FacetConstraint {
                    facet_key: filter.facet_key.clone(),
                    kind: facet.kind,
                    folded_values: filter.values.iter().map(|v| fold_case(&v.value)).collect(),
                })
            })
            .collect();
        Self { constraints }
    }

    pub fn constraints(&self) -> &[FacetConstraint] {
        &self.constraints
    }

    pub fn matches<R: FacetRecord + ?Sized>(&self, record: &R) -> bool {
        self.constraints
            .iter()
            .all(|c| c.accepts(record.facet_value(&c.facet_key).as_deref()))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::{active_filter::ActiveFilter, facet_schema::Facet, facet_value::FacetValue};
    use serde_json::json;

    fn schema() -> FacetSchema {
        FacetSchema::new(vec![
            Facet::select("status", "Status").multi(),
            Facet::text("enclosure", "Enclosure"),
        ])
    }

    fn matcher() -> AdvancedMatcher {
        let mut active = ActiveFilters::new();
        active.upsert(ActiveFilter::new("status", [FacetValue::plain("Active"), FacetValue::plain("Maintenance")]));
        active.upsert(ActiveFilter::single("enclosure", FacetValue::plain("BP_TNK")));
        AdvancedMatcher::new(&schema(), &active)
    }

    #[test]
    fn and_across_facets_or_within() {
        let matcher = matcher();
        assert!(matcher.matches(&json!({"status": "Active", "enclosure": "BP_TNK_1"})));
        assert!(matcher.matches(&json!({"status": "Maintenance", "enclosure": "bp_tnk_2"})));
        assert!(!matcher.matches(&json!({"status": "Inactive", "enclosure": "BP_TNK_1"})));
        assert!(!matcher.matches(&json!({"status": "Active", "enclosure": "BP_PMP_3"})));
    }

    #[test]
    fn select_values_compare_whole_value() {
        let matcher = matcher();
        assert!(!matcher.matches(&json!({"status": "Inactive-Active", "enclosure": "BP_TNK_1"})));
        assert!(matcher.matches(&json!({"status": "ACTIVE", "enclosure": "BP_TNK_1"})));
    }

    #[test]
    fn missing_values_never_match() {
        let matcher = matcher();
        assert!(!matcher.matches(&json!({"enclosure": "BP_TNK_1"})));
        assert!(!matcher.matches(&json!({"status": "Active", "enclosure": null})));
    }

    #[test]
    fn unknown_facets_and_empty_sets_match_everything() {
        let mut active = ActiveFilters::new();
        active.upsert(ActiveFilter::single("ghost", FacetValue::plain("boo")));
        let matcher = AdvancedMatcher::new(&schema(), &active);
        assert!(matcher.constraints().is_empty());
        assert!(matcher.matches(&json!({})));
        assert!(AdvancedMatcher::default().matches(&json!({"status": "Inactive"})));
    }
}
