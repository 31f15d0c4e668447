//! Field helpers for nullable API values

use serde::{Deserialize, Deserializer};

/// Read an explicit `null` as the field's default
///
/// The API sends `null` for unset strings and lists. A missing key is
/// handled by the container's `#[serde(default)]`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
