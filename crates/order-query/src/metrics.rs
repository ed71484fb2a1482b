use crate::state::AppState;
use axum::{
    extract::State,
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use prometheus_client::{
    encoding::text::encode,
    metrics::{counter::Counter, family::Family, histogram::Histogram},
    registry::Registry,
};
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};
use std::sync::Arc;

const DURATION_BUCKETS: [f64; 11] = [
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Operation {
    OrderEntities,
    OrdersResolved,
    OrdersFetchJoin,
    OrderProjections,
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub operation: Operation,
    pub status: Status,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct OperationLabels {
    pub operation: Operation,
}

/// Per-operation request metrics of the order query service.
#[derive(Clone, Debug)]
pub struct Metrics {
    pub request_counter: Family<Labels, Counter>,
    pub request_duration: Family<Labels, Histogram>,
    pub round_trips: Family<OperationLabels, Counter>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            request_counter: Family::default(),
            request_duration: Family::new_with_constructor(|| {
                Histogram::new(DURATION_BUCKETS.into_iter())
            }),
            round_trips: Family::default(),
        }
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "order_query_requests",
            "Order query requests by operation and outcome",
            self.request_counter.clone(),
        );
        registry.register(
            "order_query_duration_seconds",
            "Order query latency by operation and outcome",
            self.request_duration.clone(),
        );
        registry.register(
            "order_query_round_trips",
            "Storage queries issued by each operation",
            self.round_trips.clone(),
        );
    }

    pub fn record(&self, operation: Operation, status: Status, duration_secs: f64) {
        let labels = Labels { operation, status };
        self.request_counter.get_or_create(&labels).inc();
        self.request_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }

    pub fn record_round_trips(&self, operation: Operation, count: u64) {
        self.round_trips
            .get_or_create(&OperationLabels { operation })
            .inc_by(count);
    }

    pub fn round_trips_of(&self, operation: Operation) -> u64 {
        self.round_trips
            .get_or_create(&OperationLabels { operation })
            .get()
    }
}

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    let mut buffer = String::new();

    let registry = state.registry.lock().await;

    if let Err(e) = encode(&mut buffer, &registry) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode metrics: {e}"),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        buffer,
    )
        .into_response()
}
