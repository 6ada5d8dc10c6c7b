//! A single request to the value provider, keyed by the facet that issued it.

use common::facet_value::FacetValue;
use tracing::warn;

use super::{ValueProvider, normalize_provided_values};


/// Issued by the selection store when the selected facet needs provider values. The store only
/// accepts the outcome while the same facet is still selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueLookup {
    pub facet_key: String,
    pub query: String,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueLookupOutcome {
    pub lookup: ValueLookup,
    pub values: Vec<FacetValue>,
    /// The provider returned an error. `values` is empty then.
    pub failed: bool,
}

impl ValueLookup {
    /// Runs the lookup. Provider failures are logged and turned into an empty list.
    pub async fn run<P: ValueProvider + ?Sized>(self, provider: &P) -> ValueLookupOutcome {
        match provider.fetch_values(&self.facet_key, &self.query).await {
            Ok(payload) => self.resolve_with(normalize_provided_values(payload)),
            Err(e) => {
                warn!("value provider failed for facet {}: {:#}", self.facet_key, e);
                ValueLookupOutcome { lookup: self, values: vec![], failed: true }
            }
        }
    }

    /// Outcome without asking any provider, e.g. when the host has no provider configured.
    pub fn resolve_with(self, values: Vec<FacetValue>) -> ValueLookupOutcome {
        ValueLookupOutcome { lookup: self, values, failed: false }
    }
}
