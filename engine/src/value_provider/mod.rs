//! Dynamic value provider: an external, possibly asynchronous source of facet values.

use std::future::Future;

use futures::{FutureExt, future::LocalBoxFuture};
use serde_json::Value;

mod normalize;
pub use normalize::normalize_provided_values;

mod value_lookup;
pub use value_lookup::{ValueLookup, ValueLookupOutcome};


/// Looks up values for `(facet_key, query)`.
///
/// The payload is a JSON array whose items are bare strings, `[id, value]` pairs or
/// `{"id": .., "value": ..}` objects. Anything else degrades to an empty list.
pub trait ValueProvider {
    fn fetch_values(&self, facet_key: &str, query: &str) -> LocalBoxFuture<'static, anyhow::Result<Value>>;
}

impl<F, Fut> ValueProvider for F
where
    F: Fn(String, String) -> Fut,
    Fut: Future<Output = anyhow::Result<Value>> + 'static,
{
    fn fetch_values(&self, facet_key: &str, query: &str) -> LocalBoxFuture<'static, anyhow::Result<Value>> {
        self(facet_key.to_string(), query.to_string()).boxed_local()
    }
}
