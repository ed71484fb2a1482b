use crate::{
    abstract_trait::order::{
        repository::{DynOrderQueryRepository, DynOrderSimpleQueryRepository},
        service::OrderSimpleQueryServiceTrait,
    },
    domain::{
        requests::OrderSearch,
        response::{OrderResponse, SimpleOrderResponse},
    },
    metrics::{Metrics, Operation, Status as StatusUtils},
    model::Order,
    service::order::resolver::AssociationResolver,
};
use async_trait::async_trait;
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::TracingContext,
};
use tokio::time::Instant;
use tracing::{error, info};

/// Serves the order listing four ways. Every operation reads the whole
/// store with an empty filter; they differ only in how rows are fetched.
#[derive(Clone)]
pub struct OrderSimpleQueryService {
    pub query: DynOrderQueryRepository,
    pub simple_query: DynOrderSimpleQueryRepository,
    pub metrics: Metrics,
}

impl OrderSimpleQueryService {
    pub fn new(
        query: DynOrderQueryRepository,
        simple_query: DynOrderSimpleQueryRepository,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry);

        Self {
            query,
            simple_query,
            metrics,
        }
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer("order-simple-query-service")
    }

    fn start_tracing(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.get_tracer();
        let mut span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Server)
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

    fn complete_tracing(
        &self,
        tracing_ctx: &TracingContext,
        operation: Operation,
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
            info!("✅ Operation completed successfully: {message}");
        } else {
            error!("❌ Operation failed: {message}");
        }

        self.metrics.record(operation, status, elapsed);

        tracing_ctx.cx.span().end();
    }

    /// Runs `load` inside a span and records its outcome, latency and the
    /// number of storage round trips it reported.
    async fn observe<T, F>(
        &self,
        operation: Operation,
        operation_name: &str,
        strategy: &'static str,
        load: F,
    ) -> Result<Vec<T>, ServiceError>
    where
        F: Future<Output = Result<(Vec<T>, u64), RepositoryError>>,
    {
        let tracing_ctx =
            self.start_tracing(operation_name, vec![KeyValue::new("strategy", strategy)]);

        match load.await {
            Ok((rows, round_trips)) => {
                self.metrics.record_round_trips(operation, round_trips);
                tracing_ctx
                    .cx
                    .span()
                    .set_attribute(KeyValue::new("round_trips", round_trips as i64));

                let log_message = format!(
                    "Found {} orders using {round_trips} round trip(s)",
                    rows.len()
                );
                self.complete_tracing(&tracing_ctx, operation, true, &log_message);

                Ok(rows)
            }
            Err(e) => {
                let log_message = format!("Failed to load orders: {e:?}");
                self.complete_tracing(&tracing_ctx, operation, false, &log_message);

                Err(ServiceError::Repo(e))
            }
        }
    }

    /// One listing query, then one lookup per association not yet seen.
    async fn load_resolved_orders(&self) -> Result<(Vec<Order>, u64), RepositoryError> {
        let records = self
            .query
            .find_all_by_search(&OrderSearch::default())
            .await?;

        let mut resolver = AssociationResolver::new(self.query.as_ref());
        let mut orders = Vec::with_capacity(records.len());

        for record in records {
            orders.push(resolver.resolve(record).await?);
        }

        Ok((orders, 1 + resolver.round_trips()))
    }

    async fn load_fetch_joined_orders(&self) -> Result<(Vec<Order>, u64), RepositoryError> {
        let orders = self.query.find_all_with_member_delivery().await?;
        Ok((orders, 1))
    }

    async fn load_projected_orders(
        &self,
    ) -> Result<(Vec<SimpleOrderResponse>, u64), RepositoryError> {
        let orders = self.simple_query.find_order_dtos().await?;
        Ok((orders, 1))
    }
}

#[async_trait]
impl OrderSimpleQueryServiceTrait for OrderSimpleQueryService {
    async fn find_order_entities(&self) -> Result<Vec<OrderResponse>, ServiceError> {
        info!("📦 Finding orders as entities, associations resolved per order");

        let orders = self
            .observe(
                Operation::OrderEntities,
                "find_order_entities",
                "per_order_lookup",
                self.load_resolved_orders(),
            )
            .await?;

        Ok(orders.into_iter().map(OrderResponse::from).collect())
    }

    async fn find_orders_resolved(&self) -> Result<Vec<SimpleOrderResponse>, ServiceError> {
        info!("📦 Finding simple orders, associations resolved per order");

        let orders = self
            .observe(
                Operation::OrdersResolved,
                "find_orders_resolved",
                "per_order_lookup",
                self.load_resolved_orders(),
            )
            .await?;

        Ok(orders.into_iter().map(SimpleOrderResponse::from).collect())
    }

    async fn find_orders_fetch_join(&self) -> Result<Vec<SimpleOrderResponse>, ServiceError> {
        info!("📦 Finding simple orders with a fetch join");

        let orders = self
            .observe(
                Operation::OrdersFetchJoin,
                "find_orders_fetch_join",
                "fetch_join",
                self.load_fetch_joined_orders(),
            )
            .await?;

        Ok(orders.into_iter().map(SimpleOrderResponse::from).collect())
    }

    async fn find_order_projections(&self) -> Result<Vec<SimpleOrderResponse>, ServiceError> {
        info!("📦 Finding simple orders by projection");

        self.observe(
            Operation::OrderProjections,
            "find_order_projections",
            "projection",
            self.load_projected_orders(),
        )
        .await
    }
}
