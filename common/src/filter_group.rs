//! Grouped form of the active filters, one group per facet, as shown on chips.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub facet_key: String,
    pub label: String,
    pub values: Vec<String>,
}

impl FilterGroup {
    pub fn joined_values(&self) -> String {
        self.values.join(", ")
    }

    /// Text rendered on the chip, e.g. `Status: Active, Maintenance`.
    pub fn display_text(&self) -> String {
        format!("{}: {}", self.label, self.joined_values())
    }
}
