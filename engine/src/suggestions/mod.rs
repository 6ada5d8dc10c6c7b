//! Candidate columns and candidate values for the type-ahead dropdowns.

mod candidate_columns;
pub use candidate_columns::{candidate_columns, excluded_keys, is_facet_selectable};

mod candidate_values;
pub use candidate_values::{ValueSource, candidate_values, resolve_value_source};

mod row_values;
pub use row_values::RowValueIndex;
