use crate::domain::address::AddressEntity;
use serde::{Deserialize, Serialize};

/// Query parameters for listing and counting orders. Unset fields are left
/// out of the query string, so `Some(0)` filters on zero while `None` does
/// not filter at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_date_created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_date_created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_date_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_date_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
}

pub type OrderProducts = Vec<OrderProduct>;

/// A line item for [`OrderBody`].
///
/// Catalog products need `product_id` and `quantity`. Custom products need
/// `name`, `quantity` and one of the prices. The API enforces this, the
/// client does not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u32>,
    #[serde(default, rename = "name", skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_inc_tax: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_ex_tax: Option<f64>,
}

impl OrderProduct {
    pub fn catalog(product_id: u32, quantity: u32) -> Self {
        Self {
            product_id: Some(product_id),
            quantity,
            ..Default::default()
        }
    }

    pub fn custom(name: impl Into<String>, quantity: u32, price_inc_tax: f64) -> Self {
        Self {
            product_name: Some(name.into()),
            quantity,
            price_inc_tax: Some(price_inc_tax),
            ..Default::default()
        }
    }
}

/// Payload for creating an order.
///
/// `customer_id` and `status_id` are always sent, as `null` when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderBody {
    pub external_source: String,
    pub customer_id: Option<u32>,
    pub status_id: Option<u32>,
    pub billing_address: AddressEntity,
    pub products: OrderProducts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_cost_inc_tax: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_cost_ex_tax: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handling_cost_inc_tax: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handling_cost_ex_tax: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shipping_addresses: Vec<AddressEntity>,
    pub customer_message: String,
    pub staff_notes: String,
}

/// Partial update of an order. Only fields that are `Some` are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderEditParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<AddressEntity>,
}
