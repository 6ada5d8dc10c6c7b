//! Common library exports shared between the engine and its hosts.

extern crate serde;


pub mod text_match;
pub mod facet_value;
pub mod facet_schema;
pub mod active_filter;
pub mod filter_group;
pub mod facet_record;
pub mod search_query;
