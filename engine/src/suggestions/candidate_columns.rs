//! Which facets can be picked next.

use std::collections::BTreeSet;

use common::{active_filter::ActiveFilters, facet_schema::{Facet, FacetSchema}, text_match::{contains_folded, fold_case}};


/// Keys made unselectable by the `excludes` of the currently active facets.
pub fn excluded_keys<'a>(schema: &'a FacetSchema, active: &ActiveFilters) -> BTreeSet<&'a str> {
    active
        .keys()
        .filter_map(|key| schema.get(key))
        .flat_map(|facet| facet.excludes.iter().map(String::as_str))
        .collect()
}

/// Whether `key` may be opened for editing. Active facets may be reopened, excluded ones may not.
pub fn is_facet_selectable(schema: &FacetSchema, active: &ActiveFilters, key: &str) -> bool {
    if !schema.contains(key) {
        return false;
    }
    let excluded_by_other = active
        .keys()
        .filter(|k| *k != key)
        .filter_map(|k| schema.get(k))
        .any(|facet| facet.excludes_key(key));
    !excluded_by_other
}

/// Facets offered in the column dropdown: not active, not excluded, label containing `query`
/// (case-insensitive). Preferred facets come first, schema order is kept otherwise.
pub fn candidate_columns<'a>(schema: &'a FacetSchema, active: &ActiveFilters, query: &str) -> Vec<&'a Facet> {
    let excluded = excluded_keys(schema, active);
    let folded_query = fold_case(query);

    let (preferred, others): (Vec<&Facet>, Vec<&Facet>) = schema
        .iter()
        .filter(|facet| !active.contains_key(&facet.key))
        .filter(|facet| !excluded.contains(facet.key.as_str()))
        .filter(|facet| contains_folded(&facet.label, &folded_query))
        .partition(|facet| facet.preferred);

    preferred.into_iter().chain(others).collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::{active_filter::ActiveFilter, facet_value::FacetValue};

    fn schema() -> FacetSchema {
        FacetSchema::new(vec![
            Facet::select("enclosure", "Enclosure").excluding(["zone"]),
            Facet::select("status", "Status").multi().preferred(),
            Facet::text("description", "Description"),
            Facet::select("zone", "Zone").preferred(),
        ])
    }

    fn keys(facets: Vec<&Facet>) -> Vec<&str> {
        facets.into_iter().map(|f| f.key.as_str()).collect()
    }

    fn active(keys: &[&str]) -> ActiveFilters {
        let mut active = ActiveFilters::new();
        for key in keys {
            active.upsert(ActiveFilter::single(*key, FacetValue::plain("x")));
        }
        active
    }

    #[test]
    fn preferred_facets_come_first_in_schema_order() {
        let schema = schema();
        let columns = candidate_columns(&schema, &ActiveFilters::new(), "");
        assert_eq!(keys(columns), vec!["status", "zone", "enclosure", "description"]);
    }

    #[test]
    fn active_facets_are_not_offered() {
        let schema = schema();
        let columns = candidate_columns(&schema, &active(&["status"]), "");
        assert_eq!(keys(columns), vec!["zone", "enclosure", "description"]);
    }

    #[test]
    fn exclusion_is_one_directional() {
        let schema = schema();
        let columns = candidate_columns(&schema, &active(&["enclosure"]), "");
        assert_eq!(keys(columns), vec!["status", "description"]);

        // zone does not declare the exclusion back, so enclosure stays available
        let columns = candidate_columns(&schema, &active(&["zone"]), "");
        assert_eq!(keys(columns), vec!["status", "enclosure", "description"]);
    }

    #[test]
    fn query_matches_label_substring_ignoring_case() {
        let schema = schema();
        let columns = candidate_columns(&schema, &ActiveFilters::new(), "SCR");
        assert_eq!(keys(columns), vec!["description"]);
        assert!(candidate_columns(&schema, &ActiveFilters::new(), "nothing").is_empty());
    }

    #[test]
    fn unknown_active_keys_are_ignored() {
        let schema = schema();
        let columns = candidate_columns(&schema, &active(&["ghost"]), "");
        assert_eq!(columns.len(), 4);
    }

    #[test]
    fn selectable_respects_exclusions_of_other_facets() {
        let schema = schema();
        assert!(is_facet_selectable(&schema, &active(&["enclosure"]), "enclosure"));
        assert!(!is_facet_selectable(&schema, &active(&["enclosure"]), "zone"));
        assert!(is_facet_selectable(&schema, &active(&["zone"]), "enclosure"));
        assert!(!is_facet_selectable(&schema, &ActiveFilters::new(), "ghost"));
    }
}
