use crate::{
    abstract_trait::order::OrderServiceTrait,
    client::{HttpClient, relevant_error},
    domain::{
        requests::{OrderBody, OrderEditParams, OrderListParams},
        response::{ApiResponse, Count, Order, Orders},
    },
};
use async_trait::async_trait;
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use reqwest::{Method as HttpMethod, RequestBuilder, header::HeaderMap};
use serde::de::DeserializeOwned;
use shared::{
    errors::ClientError,
    utils::{HeaderInjector, Method, Metrics, Status as StatusUtils, TracingContext},
};
use tokio::time::Instant;
use tracing::{error, info};

const ORDERS_PATH: &str = "orders/";

/// Orders resource of the v2 API.
#[derive(Clone)]
pub struct OrderService {
    http: HttpClient,
    metrics: Metrics,
}

impl OrderService {
    pub fn new(http: HttpClient, metrics: Metrics) -> Self {
        Self { http, metrics }
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer("bigcommerce-order-service")
    }

    fn inject_trace_context(&self, cx: &Context, request: RequestBuilder) -> RequestBuilder {
        let mut headers = HeaderMap::new();
        global::get_text_map_propagator(|propagator| {
            propagator.inject_context(cx, &mut HeaderInjector(&mut headers))
        });
        request.headers(headers)
    }

    fn start_tracing(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.get_tracer();
        let mut span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Client)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation_name}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation_name.to_string())],
        );

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    fn complete_tracing_success(&self, tracing_ctx: &TracingContext, method: Method, message: &str) {
        self.complete_tracing_internal(tracing_ctx, method, true, message);
    }

    fn complete_tracing_error(&self, tracing_ctx: &TracingContext, method: Method, message: &str) {
        self.complete_tracing_internal(tracing_ctx, method, false, message);
    }

    fn complete_tracing_internal(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let status_str = if is_success { "SUCCESS" } else { "ERROR" };
        let status = if is_success {
            StatusUtils::Success
        } else {
            StatusUtils::Error
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        tracing_ctx.cx.span().add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", status_str),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            info!("Operation completed successfully: {message}");
        } else {
            error!("Operation failed: {message}");
        }

        self.metrics.record(method, status, elapsed);

        tracing_ctx.cx.span().end();
    }

    /// Runs one traced round trip. A request that could not be built is
    /// reported like any other failure.
    async fn dispatch<T>(
        &self,
        operation_name: &str,
        method: Method,
        attributes: Vec<KeyValue>,
        request: Result<RequestBuilder, ClientError>,
    ) -> Result<ApiResponse<T>, ClientError>
    where
        T: DeserializeOwned + Default,
    {
        let tracing_ctx = self.start_tracing(operation_name, attributes);

        let result = match request {
            Ok(request) => {
                let request = self.inject_trace_context(&tracing_ctx.cx, request);
                relevant_error(self.http.perform_request::<T>(request).await)
            }
            Err(err) => Err(err),
        };

        match &result {
            Ok(response) => self.complete_tracing_success(
                &tracing_ctx,
                method,
                &format!("{operation_name} returned {}", response.status),
            ),
            Err(err) => self.complete_tracing_error(
                &tracing_ctx,
                method,
                &format!("{operation_name} failed: {err}"),
            ),
        }

        result
    }
}

fn list_attributes(operation: &'static str, params: &OrderListParams) -> Vec<KeyValue> {
    let mut attributes = vec![
        KeyValue::new("component", "order"),
        KeyValue::new("operation", operation),
    ];
    if let Some(page) = params.page {
        attributes.push(KeyValue::new("page", i64::from(page)));
    }
    if let Some(limit) = params.limit {
        attributes.push(KeyValue::new("limit", i64::from(limit)));
    }
    attributes
}

#[async_trait]
impl OrderServiceTrait for OrderService {
    async fn list(&self, params: &OrderListParams) -> Result<ApiResponse<Orders>, ClientError> {
        info!(
            "Retrieving orders (page: {:?}, limit: {:?})",
            params.page, params.limit
        );

        let request = self
            .http
            .request(HttpMethod::GET, ORDERS_PATH)
            .map(|request| request.query(params));

        let response: ApiResponse<Orders> = self
            .dispatch(
                "ListOrders",
                Method::Get,
                list_attributes("list", params),
                request,
            )
            .await?;

        info!("Successfully fetched {} orders", response.data.len());
        Ok(response)
    }

    async fn count(&self, params: &OrderListParams) -> Result<ApiResponse<Count>, ClientError> {
        info!("Counting orders");

        let request = self
            .http
            .request(HttpMethod::GET, &format!("{ORDERS_PATH}count"))
            .map(|request| request.query(params));

        self.dispatch(
            "CountOrders",
            Method::Get,
            list_attributes("count", params),
            request,
        )
        .await
    }

    async fn show(&self, id: u32) -> Result<ApiResponse<Order>, ClientError> {
        info!("Retrieving order {id}");

        let request = self
            .http
            .request(HttpMethod::GET, &format!("{ORDERS_PATH}{id}"));

        self.dispatch(
            "ShowOrder",
            Method::Get,
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("operation", "show"),
                KeyValue::new("id", i64::from(id)),
            ],
            request,
        )
        .await
    }

    async fn create(&self, body: &OrderBody) -> Result<ApiResponse<Order>, ClientError> {
        info!("Creating order with {} products", body.products.len());

        let request = self.http.json_request(HttpMethod::POST, ORDERS_PATH, body);

        let response: ApiResponse<Order> = self
            .dispatch(
                "CreateOrder",
                Method::Post,
                vec![
                    KeyValue::new("component", "order"),
                    KeyValue::new("operation", "create"),
                    KeyValue::new("products", body.products.len() as i64),
                ],
                request,
            )
            .await?;

        info!("Created order {}", response.data.id);
        Ok(response)
    }

    async fn edit(
        &self,
        id: u32,
        params: &OrderEditParams,
    ) -> Result<ApiResponse<Order>, ClientError> {
        info!("Updating order {id}");

        let request = self
            .http
            .json_request(HttpMethod::PUT, &format!("{ORDERS_PATH}{id}"), params);

        self.dispatch(
            "EditOrder",
            Method::Put,
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("operation", "edit"),
                KeyValue::new("id", i64::from(id)),
            ],
            request,
        )
        .await
    }
}
