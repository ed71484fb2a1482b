use crate::domain::response::SimpleOrderResponse;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderSimpleQueryRepository = Arc<dyn OrderSimpleQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderSimpleQueryRepositoryTrait {
    /// Selects only the view columns and builds the view rows directly.
    async fn find_order_dtos(&self) -> Result<Vec<SimpleOrderResponse>, RepositoryError>;
}
