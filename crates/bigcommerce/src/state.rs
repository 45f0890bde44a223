use crate::{abstract_trait::order::DynOrderService, client::HttpClient, di::DependenciesInject};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{config::BigCommerceConfig, utils::Metrics};
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;
use tracing::info;

/// Entry point for talking to one store.
#[derive(Clone)]
pub struct BigCommerce {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub metrics: Metrics,
}

impl fmt::Debug for BigCommerce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BigCommerce")
            .field("di_container", &self.di_container)
            .field("registry", &"<Registry>")
            .finish()
    }
}

impl BigCommerce {
    pub async fn new(config: &BigCommerceConfig) -> Result<Self> {
        info!("Initializing BigCommerce client for store {}", config.store_hash);

        let registry = Arc::new(Mutex::new(Registry::default()));
        let metrics = Metrics::new();

        let http = HttpClient::new(config).context("Failed to build BigCommerce HTTP client")?;

        let di_container = DependenciesInject::new(http, metrics.clone());

        registry.lock().await.register_metrics(&metrics);

        Ok(Self {
            di_container,
            registry,
            metrics,
        })
    }

    pub fn orders(&self) -> DynOrderService {
        self.di_container.orders.clone()
    }
}

trait MetricsRegister {
    fn register_metrics(&mut self, metrics: &Metrics);
}

impl MetricsRegister for Registry {
    fn register_metrics(&mut self, metrics: &Metrics) {
        metrics.register(self);
    }
}
