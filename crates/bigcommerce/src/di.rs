use crate::{
    abstract_trait::order::DynOrderService, client::HttpClient, service::OrderService,
};
use shared::utils::Metrics;
use std::sync::Arc;

/// Resource services sharing one HTTP client.
#[derive(Clone)]
pub struct DependenciesInject {
    pub orders: DynOrderService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("orders", &"DynOrderService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(http: HttpClient, metrics: Metrics) -> Self {
        let orders: DynOrderService = Arc::new(OrderService::new(http, metrics));

        Self { orders }
    }
}
