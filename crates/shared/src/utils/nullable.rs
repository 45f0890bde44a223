use serde::{Deserialize, Deserializer};

/// Decodes an explicit JSON `null` as the type's zero value.
///
/// Pair with `#[serde(default)]` so that missing keys behave the same way.
pub fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
