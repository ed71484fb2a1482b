use crate::{
    abstract_trait::order::{
        repository::{DynOrderQueryRepository, DynOrderSimpleQueryRepository},
        service::DynOrderSimpleQueryService,
    },
    repository::order::{OrderQueryRepository, OrderSimpleQueryRepository},
    service::order::OrderSimpleQueryService,
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub order_simple_query: DynOrderSimpleQueryService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("order_simple_query", &"OrderSimpleQueryService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, registry: &mut Registry) -> Self {
        let order_query_repo =
            Arc::new(OrderQueryRepository::new(pool.clone())) as DynOrderQueryRepository;
        let order_simple_query_repo =
            Arc::new(OrderSimpleQueryRepository::new(pool)) as DynOrderSimpleQueryRepository;

        Self::from_repositories(order_query_repo, order_simple_query_repo, registry)
    }

    /// Wires the services over any repository implementations.
    pub fn from_repositories(
        order_query_repo: DynOrderQueryRepository,
        order_simple_query_repo: DynOrderSimpleQueryRepository,
        registry: &mut Registry,
    ) -> Self {
        let order_simple_query = Arc::new(OrderSimpleQueryService::new(
            order_query_repo,
            order_simple_query_repo,
            registry,
        )) as DynOrderSimpleQueryService;

        Self { order_simple_query }
    }
}
