use crate::domain::address::AddressEntity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::utils::{null_to_default, parse_datetime};

pub type Orders = Vec<Order>;

/// A placed order as returned by the API.
///
/// Monetary amounts are kept as the decimal strings the API sends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    #[serde(deserialize_with = "null_to_default")]
    pub id: u32,
    #[serde(deserialize_with = "null_to_default")]
    pub customer_id: u32,
    #[serde(deserialize_with = "null_to_default")]
    pub date_created: String,
    #[serde(deserialize_with = "null_to_default")]
    pub date_modified: String,
    #[serde(deserialize_with = "null_to_default")]
    pub date_shipped: String,
    #[serde(deserialize_with = "null_to_default")]
    pub status_id: u32,
    #[serde(deserialize_with = "null_to_default")]
    pub status: String,
    #[serde(deserialize_with = "null_to_default")]
    pub handling_cost_ex_tax: String,
    #[serde(deserialize_with = "null_to_default")]
    pub handling_cost_inc_tax: String,
    #[serde(deserialize_with = "null_to_default")]
    pub handling_cost_tax: String,
    #[serde(deserialize_with = "null_to_default")]
    pub shipping_cost_ex_tax: String,
    #[serde(deserialize_with = "null_to_default")]
    pub shipping_cost_inc_tax: String,
    #[serde(deserialize_with = "null_to_default")]
    pub shipping_cost_tax: String,
    #[serde(deserialize_with = "null_to_default")]
    pub subtotal_ex_tax: String,
    #[serde(deserialize_with = "null_to_default")]
    pub subtotal_inc_tax: String,
    #[serde(deserialize_with = "null_to_default")]
    pub subtotal_tax: String,
    #[serde(deserialize_with = "null_to_default")]
    pub total_ex_tax: String,
    #[serde(deserialize_with = "null_to_default")]
    pub total_inc_tax: String,
    #[serde(deserialize_with = "null_to_default")]
    pub total_tax: String,
    #[serde(deserialize_with = "null_to_default")]
    pub base_shipping_cost: String,
    #[serde(deserialize_with = "null_to_default")]
    pub items_total: u32,
    #[serde(deserialize_with = "null_to_default")]
    pub payment_method: String,
    #[serde(deserialize_with = "null_to_default")]
    pub payment_status: String,
    #[serde(deserialize_with = "null_to_default")]
    pub ip_address: String,
    #[serde(deserialize_with = "null_to_default")]
    pub currency_id: u32,
    #[serde(deserialize_with = "null_to_default")]
    pub currency_code: String,
    #[serde(deserialize_with = "null_to_default")]
    pub staff_notes: String,
    #[serde(deserialize_with = "null_to_default")]
    pub customer_message: String,
    #[serde(deserialize_with = "null_to_default")]
    pub discount_amount: String,
    #[serde(alias = "counpon_discount", deserialize_with = "null_to_default")]
    pub coupon_discount: String,
    #[serde(deserialize_with = "null_to_default")]
    pub shipping_address_count: u32,
    #[serde(deserialize_with = "null_to_default")]
    pub billing_address: AddressEntity,
}

impl Order {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_datetime(&self.date_created)
    }

    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        parse_datetime(&self.date_modified)
    }

    /// `None` until the order has shipped.
    pub fn shipped_at(&self) -> Option<DateTime<Utc>> {
        parse_datetime(&self.date_shipped)
    }
}
