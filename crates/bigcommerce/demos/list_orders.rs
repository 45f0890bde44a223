use anyhow::{Context, Result};
use bigcommerce::{BigCommerce, BigCommerceConfig, domain::requests::OrderListParams};
use dotenv::dotenv;
use shared::utils::init_logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let log_dir = std::env::var("BIGCOMMERCE_LOG_DIR").unwrap_or_else(|_| "./logs".into());

    init_logger("list_orders", &log_dir);

    let config = BigCommerceConfig::init().context("Failed to load configuration")?;
    let client = BigCommerce::new(&config)
        .await
        .context("Failed to create BigCommerce client")?;

    let params = OrderListParams {
        page: Some(1),
        limit: Some(10),
        ..Default::default()
    };

    let orders = client.orders().list(&params).await?.into_inner();
    let total = client.orders().count(&params).await?.into_inner();

    for order in &orders {
        println!(
            "#{} {} {} {}",
            order.id, order.status, order.total_inc_tax, order.currency_code
        );
    }
    info!("Listed {} of {} orders", orders.len(), total.count);

    Ok(())
}
