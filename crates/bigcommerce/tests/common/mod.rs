#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, Query, RawQuery, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use bigcommerce::{
    BigCommerce, BigCommerceConfig,
    domain::{
        address::AddressEntity,
        requests::{OrderBody, OrderListParams},
        response::{Count, Order},
    },
};
use serde_json::{Value, json};
use std::{
    collections::BTreeMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
};
use tokio::net::TcpListener;

pub const STORE_HASH: &str = "teststore";
pub const TOKEN: &str = "test-token";
const CREATED_AT: &str = "Tue, 20 Nov 2012 00:00:00 +0000";

/// In-memory stand-in for the Orders endpoints.
#[derive(Clone, Default)]
pub struct MockStore {
    pub orders: Arc<Mutex<BTreeMap<u32, Order>>>,
    pub last_query: Arc<Mutex<Option<String>>>,
    pub last_body: Arc<Mutex<Option<Value>>>,
}

impl MockStore {
    pub fn seed(&self, order: Order) {
        self.orders.lock().unwrap().insert(order.id, order);
    }

    pub fn last_query(&self) -> String {
        self.last_query.lock().unwrap().clone().unwrap_or_default()
    }

    pub fn last_body(&self) -> Value {
        self.last_body.lock().unwrap().clone().unwrap_or(Value::Null)
    }
}

pub fn sample_address() -> AddressEntity {
    AddressEntity {
        first_name: "Jane".into(),
        last_name: "Doe".into(),
        street_1: "1 Main St".into(),
        city: "Austin".into(),
        state: "Texas".into(),
        zip: "78701".into(),
        country: "United States".into(),
        country_iso2: "US".into(),
        email: "jane@example.com".into(),
        ..Default::default()
    }
}

pub fn sample_order(id: u32, customer_id: u32, status_id: u32) -> Order {
    Order {
        id,
        customer_id,
        status_id,
        status: "Pending".into(),
        date_created: CREATED_AT.into(),
        date_modified: CREATED_AT.into(),
        subtotal_ex_tax: "10.0000".into(),
        total_inc_tax: "10.8000".into(),
        items_total: 1,
        currency_code: "USD".into(),
        billing_address: sample_address(),
        ..Default::default()
    }
}

fn api_error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!([{ "status": status.as_u16(), "message": message }])),
    )
        .into_response()
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("x-auth-token")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == TOKEN)
}

fn filter_matches(order: &Order, params: &OrderListParams) -> bool {
    params.customer_id.is_none_or(|c| order.customer_id == c)
        && params.status_id.is_none_or(|s| order.status_id == s)
        && params.min_id.is_none_or(|id| order.id >= id)
        && params.max_id.is_none_or(|id| order.id <= id)
}

async fn list_orders(
    State(store): State<MockStore>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
    Query(params): Query<OrderListParams>,
) -> Response {
    if !authorized(&headers) {
        return api_error(StatusCode::UNAUTHORIZED, "You are not authorized");
    }
    *store.last_query.lock().unwrap() = raw;

    let limit = params.limit.unwrap_or(50) as usize;
    let page = params.page.unwrap_or(1).max(1) as usize;

    let found: Vec<Order> = store
        .orders
        .lock()
        .unwrap()
        .values()
        .filter(|o| filter_matches(o, &params))
        .skip((page - 1) * limit)
        .take(limit)
        .cloned()
        .collect();

    if found.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }
    Json(found).into_response()
}

async fn count_orders(
    State(store): State<MockStore>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
    Query(params): Query<OrderListParams>,
) -> Response {
    if !authorized(&headers) {
        return api_error(StatusCode::UNAUTHORIZED, "You are not authorized");
    }
    *store.last_query.lock().unwrap() = raw;

    let count = store
        .orders
        .lock()
        .unwrap()
        .values()
        .filter(|o| filter_matches(o, &params))
        .count() as u32;

    Json(Count { count }).into_response()
}

async fn show_order(
    State(store): State<MockStore>,
    headers: HeaderMap,
    Path((_, id)): Path<(String, u32)>,
) -> Response {
    if !authorized(&headers) {
        return api_error(StatusCode::UNAUTHORIZED, "You are not authorized");
    }

    match store.orders.lock().unwrap().get(&id) {
        Some(order) => Json(order.clone()).into_response(),
        None => api_error(
            StatusCode::NOT_FOUND,
            "The requested resource was not found.",
        ),
    }
}

async fn create_order(
    State(store): State<MockStore>,
    headers: HeaderMap,
    Json(raw): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return api_error(StatusCode::UNAUTHORIZED, "You are not authorized");
    }
    *store.last_body.lock().unwrap() = Some(raw.clone());

    let body: OrderBody = match serde_json::from_value(raw) {
        Ok(body) => body,
        Err(e) => return api_error(StatusCode::BAD_REQUEST, &e.to_string()),
    };
    if body.products.is_empty() {
        return api_error(
            StatusCode::BAD_REQUEST,
            "The field 'products' is invalid.",
        );
    }

    let mut orders = store.orders.lock().unwrap();
    let id = orders.keys().next_back().copied().unwrap_or(99) + 1;

    let subtotal: f64 = body
        .products
        .iter()
        .map(|p| p.price_inc_tax.or(p.price_ex_tax).unwrap_or(10.0) * f64::from(p.quantity))
        .sum();

    let order = Order {
        id,
        customer_id: body.customer_id.unwrap_or(0),
        status_id: body.status_id.unwrap_or(1),
        status: "Pending".into(),
        date_created: CREATED_AT.into(),
        date_modified: CREATED_AT.into(),
        subtotal_inc_tax: format!("{subtotal:.4}"),
        total_inc_tax: format!("{subtotal:.4}"),
        items_total: body.products.iter().map(|p| p.quantity).sum(),
        currency_code: "USD".into(),
        customer_message: body.customer_message,
        staff_notes: body.staff_notes,
        billing_address: body.billing_address,
        shipping_address_count: body.shipping_addresses.len() as u32,
        ..Default::default()
    };
    orders.insert(id, order.clone());

    (StatusCode::CREATED, Json(order)).into_response()
}

async fn edit_order(
    State(store): State<MockStore>,
    headers: HeaderMap,
    Path((_, id)): Path<(String, u32)>,
    Json(raw): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return api_error(StatusCode::UNAUTHORIZED, "You are not authorized");
    }
    *store.last_body.lock().unwrap() = Some(raw.clone());

    let mut orders = store.orders.lock().unwrap();
    let Some(order) = orders.get_mut(&id) else {
        return api_error(
            StatusCode::NOT_FOUND,
            "The requested resource was not found.",
        );
    };

    if let Some(status_id) = raw.get("status_id").and_then(Value::as_u64) {
        order.status_id = status_id as u32;
    }
    if let Some(customer_id) = raw.get("customer_id").and_then(Value::as_u64) {
        order.customer_id = customer_id as u32;
    }
    if let Some(notes) = raw.get("staff_notes").and_then(Value::as_str) {
        order.staff_notes = notes.to_string();
    }
    if let Some(message) = raw.get("customer_message").and_then(Value::as_str) {
        order.customer_message = message.to_string();
    }
    if let Some(address) = raw.get("billing_address") {
        match serde_json::from_value::<AddressEntity>(address.clone()) {
            Ok(address) => order.billing_address = address,
            Err(e) => return api_error(StatusCode::BAD_REQUEST, &e.to_string()),
        }
    }

    Json(order.clone()).into_response()
}

pub fn mock_api(store: MockStore) -> Router {
    Router::new()
        .route(
            "/stores/{hash}/v2/orders/",
            get(list_orders).post(create_order),
        )
        .route("/stores/{hash}/v2/orders/count", get(count_orders))
        .route(
            "/stores/{hash}/v2/orders/{id}",
            get(show_order).put(edit_order),
        )
        .with_state(store)
}

pub async fn spawn(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

pub fn config_for(addr: SocketAddr, token: &str) -> BigCommerceConfig {
    BigCommerceConfig::new(STORE_HASH, token)
        .with_client_id("test-client")
        .with_api_url(format!("http://{addr}"))
}

/// Starts the mock API and a client pointed at it.
pub async fn setup() -> (BigCommerce, MockStore) {
    let store = MockStore::default();
    let addr = spawn(mock_api(store.clone())).await;
    let client = BigCommerce::new(&config_for(addr, TOKEN)).await.unwrap();
    (client, store)
}
