use serde::{Deserialize, Serialize};
use shared::utils::null_to_default;

/// Billing or shipping address attached to an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressEntity {
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_to_default"
    )]
    pub first_name: String,
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_to_default"
    )]
    pub last_name: String,
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_to_default"
    )]
    pub company: String,
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_to_default"
    )]
    pub street_1: String,
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_to_default"
    )]
    pub street_2: String,
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_to_default"
    )]
    pub city: String,
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_to_default"
    )]
    pub state: String,
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_to_default"
    )]
    pub zip: String,
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_to_default"
    )]
    pub country: String,
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_to_default"
    )]
    pub country_iso2: String,
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_to_default"
    )]
    pub phone: String,
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_to_default"
    )]
    pub email: String,
}
