use crate::domain::{
    requests::{OrderBody, OrderEditParams, OrderListParams},
    response::{ApiResponse, Count, Order, Orders},
};
use async_trait::async_trait;
use shared::errors::ClientError;
use std::sync::Arc;

pub type DynOrderService = Arc<dyn OrderServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderServiceTrait {
    async fn list(&self, params: &OrderListParams) -> Result<ApiResponse<Orders>, ClientError>;
    async fn count(&self, params: &OrderListParams) -> Result<ApiResponse<Count>, ClientError>;
    async fn show(&self, id: u32) -> Result<ApiResponse<Order>, ClientError>;
    async fn create(&self, body: &OrderBody) -> Result<ApiResponse<Order>, ClientError>;
    async fn edit(
        &self,
        id: u32,
        params: &OrderEditParams,
    ) -> Result<ApiResponse<Order>, ClientError>;
}
