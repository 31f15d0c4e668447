//! Payload pruner
//!
//! Strips absence markers, empty maps and empty lists from a payload tree,
//! bottom-up. Falsy scalars (`0`, `false`, `""`) are kept.

use crate::core::models::NestedValue;

/// Return a copy of `value` with every vacant child removed
///
/// Children are pruned first, so a map whose only entry was an empty list
/// disappears from its parent as well. The root itself is never dropped:
/// `Absent` and scalars pass through, and a root container that ends up
/// empty is returned as an empty container.
///
/// The input must be finite and acyclic, which [`NestedValue`] guarantees
/// by ownership.
#[must_use]
pub fn prune(value: &NestedValue) -> NestedValue {
    match value {
        NestedValue::Map(map) => NestedValue::Map(
            map.iter()
                .map(|(k, v)| (k.clone(), prune(v)))
                .filter(|(_, v)| !v.is_vacant())
                .collect(),
        ),
        NestedValue::List(items) => {
            NestedValue::List(items.iter().map(prune).filter(|v| !v.is_vacant()).collect())
        },
        NestedValue::Scalar(_) | NestedValue::Absent => value.clone(),
    }
}

/// [`prune`] over a JSON value
#[must_use]
pub fn prune_json(value: &serde_json::Value) -> serde_json::Value {
    prune(&NestedValue::from(value)).into()
}
