//! Normalizes provider payloads to `(id, value)` pairs.

use common::{facet_record::json_value_to_string, facet_value::FacetValue};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;


#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProvidedPair {
    Tuple(Value, Value),
    Entry { id: Value, value: Value },
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(_) | Value::Number(_) | Value::Bool(_) => json_value_to_string(value).map(|s| s.into_owned()),
        _ => None,
    }
}

fn normalize_item(item: Value) -> Option<FacetValue> {
    if let Some(plain) = scalar(&item) {
        return Some(FacetValue::plain(plain));
    }
    let (id, value) = match serde_json::from_value::<ProvidedPair>(item).ok()? {
        ProvidedPair::Tuple(id, value) => (id, value),
        ProvidedPair::Entry { id, value } => (id, value),
    };
    Some(FacetValue::new(scalar(&id)?, scalar(&value)?))
}

/// Bare scalars become `id = value`, pairs pass through. Malformed items are skipped and a
/// payload that is not an array yields nothing.
pub fn normalize_provided_values(payload: Value) -> Vec<FacetValue> {
    let Value::Array(items) = payload else {
        debug!("value provider returned a non-array payload, treating it as empty");
        return vec![];
    };
    let total = items.len();
    let values: Vec<FacetValue> = items.into_iter().filter_map(normalize_item).collect();
    if values.len() != total {
        debug!("value provider returned {} malformed items", total - values.len());
    }
    values
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_strings_use_the_value_as_id() {
        let values = normalize_provided_values(json!(["Active", "Inactive"]));
        assert_eq!(values, vec![FacetValue::plain("Active"), FacetValue::plain("Inactive")]);
    }

    #[test]
    fn pairs_pass_through() {
        let values = normalize_provided_values(json!([
            ["1", "BP_TNK_1"],
            {"id": 2, "value": "BP_PSV_0_1"},
        ]));
        assert_eq!(values, vec![FacetValue::new("1", "BP_TNK_1"), FacetValue::new("2", "BP_PSV_0_1")]);
    }

    #[test]
    fn numbers_are_stringified() {
        let values = normalize_provided_values(json!([3, true]));
        assert_eq!(values, vec![FacetValue::plain("3"), FacetValue::plain("true")]);
    }

    #[test]
    fn malformed_payloads_degrade() {
        assert!(normalize_provided_values(json!({"values": ["Active"]})).is_empty());
        assert!(normalize_provided_values(json!("Active")).is_empty());
        assert!(normalize_provided_values(Value::Null).is_empty());

        let values = normalize_provided_values(json!(["Active", null, [1, 2, 3], {"label": "x"}, [null, "v"]]));
        assert_eq!(values, vec![FacetValue::plain("Active")]);
    }
}
