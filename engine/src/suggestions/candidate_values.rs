//! Values offered for the selected facet.

use common::{facet_schema::Facet, facet_value::FacetValue, text_match::fold_case};


/// Where the values of a `Select` facet come from, in order of precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource<'a> {
    /// Options declared on the facet.
    Static(&'a [FacetValue]),
    /// Last result of the dynamic value provider.
    Provided(&'a [FacetValue]),
    /// Distinct values seen in the records.
    Rows(&'a [FacetValue]),
    Empty,
}

pub fn resolve_value_source<'a>(
    facet: &'a Facet,
    provided: Option<&'a [FacetValue]>,
    rows: Option<&'a [FacetValue]>,
) -> ValueSource<'a> {
    if facet.has_static_options() {
        return ValueSource::Static(&facet.options);
    }
    if let Some(provided) = provided {
        return ValueSource::Provided(provided);
    }
    if let Some(rows) = rows {
        return ValueSource::Rows(rows);
    }
    ValueSource::Empty
}

/// Candidate values for `facet` given the typed `query`. Text facets never have a value list.
pub fn candidate_values(facet: &Facet, query: &str, source: ValueSource<'_>) -> Vec<FacetValue> {
    if !facet.is_select() {
        return vec![];
    }
    let folded_query = fold_case(query);
    match source {
        ValueSource::Static(values) | ValueSource::Provided(values) | ValueSource::Rows(values) => values
            .iter()
            .filter(|v| v.matches_folded_query(&folded_query))
            .cloned()
            .collect(),
        ValueSource::Empty => vec![],
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn enclosure() -> Facet {
        Facet::select("enclosure", "Enclosure").with_options(["BP_PSV_0_1", "BP_PSV_0_2", "BP_TNK_1"])
    }

    fn values(list: &[FacetValue]) -> Vec<&str> {
        list.iter().map(|v| v.value.as_str()).collect()
    }

    #[test]
    fn static_options_filter_by_substring_in_order() {
        let facet = enclosure();
        let source = resolve_value_source(&facet, None, None);
        assert_eq!(values(&candidate_values(&facet, "psv", source)), vec!["BP_PSV_0_1", "BP_PSV_0_2"]);
        assert_eq!(candidate_values(&facet, "", source).len(), 3);
        assert!(candidate_values(&facet, "pump", source).is_empty());
    }

    #[test]
    fn static_options_win_over_other_sources() {
        let facet = enclosure();
        let provided = vec![FacetValue::plain("other")];
        let source = resolve_value_source(&facet, Some(provided.as_slice()), Some(provided.as_slice()));
        assert!(matches!(source, ValueSource::Static(_)));
    }

    #[test]
    fn provided_values_win_over_rows_and_follow_the_query() {
        let facet = Facet::select("owner", "Owner");
        let provided = vec![FacetValue::new("7", "Operations"), FacetValue::new("8", "Maintenance")];
        let rows = vec![FacetValue::plain("Rows")];
        let source = resolve_value_source(&facet, Some(provided.as_slice()), Some(rows.as_slice()));
        assert_eq!(candidate_values(&facet, "", source), provided);
        assert_eq!(candidate_values(&facet, "main", source), vec![FacetValue::new("8", "Maintenance")]);
        assert!(candidate_values(&facet, "zzz", source).is_empty());
    }

    #[test]
    fn row_values_are_filtered_like_static_options() {
        let facet = Facet::select("status", "Status");
        let rows = vec![FacetValue::plain("Active"), FacetValue::plain("Inactive")];
        let source = resolve_value_source(&facet, None, Some(rows.as_slice()));
        assert_eq!(values(&candidate_values(&facet, "INACT", source)), vec!["Inactive"]);
        assert_eq!(values(&candidate_values(&facet, "active", source)), vec!["Active", "Inactive"]);
    }

    #[test]
    fn text_facets_have_no_values() {
        let facet = Facet::text("description", "Description");
        let rows = vec![FacetValue::plain("Unit 1")];
        assert!(candidate_values(&facet, "", ValueSource::Rows(&rows)).is_empty());
    }
}
