//! Shared proptest strategies for unit tests.

use std::collections::HashMap;

use proptest::prelude::*;

use crate::params::QueryParams;

/// Generates a short, non-empty parameter name from a small alphabet so
/// generated names and query keys collide often.
pub(crate) fn arb_param_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{1,2}").expect("valid regex")
}

/// Generates a list of parameter names (may repeat or be empty).
pub(crate) fn arb_param_names(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_param_name(), 0..=max)
}

/// Generates query parameters over the same alphabet as names.
pub(crate) fn arb_query(max: usize) -> impl Strategy<Value = QueryParams> {
    prop::collection::hash_map(
        arb_param_name(),
        prop::string::string_regex("[a-z0-9]{0,6}").expect("valid regex"),
        0..=max,
    )
    .prop_map(|map: HashMap<String, String>| map.into_iter().collect::<QueryParams>())
}
