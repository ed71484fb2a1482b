use crate::domain::response::{OrderResponse, SimpleOrderResponse};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynOrderSimpleQueryService = Arc<dyn OrderSimpleQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderSimpleQueryServiceTrait {
    /// v1: full order graph, associations resolved one order at a time.
    async fn find_order_entities(&self) -> Result<Vec<OrderResponse>, ServiceError>;
    /// v2: same loading as v1, mapped to the flattened view.
    async fn find_orders_resolved(&self) -> Result<Vec<SimpleOrderResponse>, ServiceError>;
    /// v3: one join query, mapped to the flattened view.
    async fn find_orders_fetch_join(&self) -> Result<Vec<SimpleOrderResponse>, ServiceError>;
    /// v4: one projection query straight into the flattened view.
    async fn find_order_projections(&self) -> Result<Vec<SimpleOrderResponse>, ServiceError>;
}
