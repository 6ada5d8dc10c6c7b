//! Distinct values per facet key, collected from the record collection.

use std::collections::{HashMap, HashSet};

use common::{facet_record::FacetRecord, facet_value::FacetValue};


#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowValueIndex {
    values: HashMap<String, Vec<FacetValue>>,
}

impl RowValueIndex {
    /// First-seen order, blank values skipped.
    pub fn build<R: FacetRecord>(records: &[R]) -> Self {
        let mut values: HashMap<String, Vec<FacetValue>> = HashMap::new();
        let mut seen: HashSet<(String, String)> = HashSet::new();
        for record in records {
            for (key, value) in record.facet_entries() {
                if value.trim().is_empty() {
                    continue;
                }
                if !seen.insert((key.to_string(), value.to_string())) {
                    continue;
                }
                values.entry(key.to_string()).or_default().push(FacetValue::plain(value.into_owned()));
            }
        }
        Self { values }
    }

    pub fn get(&self, facet_key: &str) -> Option<&[FacetValue]> {
        self.values.get(facet_key).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn collects_distinct_values_in_first_seen_order() {
        let records = vec![
            json!({"enclosure": "BP_PSV_0_1", "status": "Active"}),
            json!({"enclosure": "BP_PSV_0_2", "status": "Inactive"}),
            json!({"enclosure": "BP_TNK_1", "status": "Active", "note": ""}),
            json!({"status": null}),
        ];
        let index = RowValueIndex::build(&records);
        let status: Vec<&str> = index.get("status").unwrap().iter().map(|v| v.value.as_str()).collect();
        assert_eq!(status, vec!["Active", "Inactive"]);
        assert_eq!(index.get("enclosure").unwrap().len(), 3);
        assert_eq!(index.get("note"), None);
    }

    #[test]
    fn empty_collection_gives_empty_index() {
        let records: Vec<serde_json::Value> = vec![];
        assert!(RowValueIndex::build(&records).is_empty());
    }
}
