use crate::{
    domain::requests::OrderSearch,
    model::{Delivery, Member, Order, OrderRecord},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    /// Orders matching `search`, associations left unresolved.
    async fn find_all_by_search(
        &self,
        search: &OrderSearch,
    ) -> Result<Vec<OrderRecord>, RepositoryError>;
    async fn find_member_by_id(&self, id: i64) -> Result<Option<Member>, RepositoryError>;
    async fn find_delivery_by_id(&self, id: i64) -> Result<Option<Delivery>, RepositoryError>;
    /// Every order with member and delivery loaded by the same query.
    async fn find_all_with_member_delivery(&self) -> Result<Vec<Order>, RepositoryError>;
}
