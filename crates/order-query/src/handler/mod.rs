mod simple_order;

use crate::{metrics::metrics_handler, state::AppState};
use anyhow::Result;
use axum::{Json, Router, routing::get};
use shared::{errors::HttpError, utils::shutdown_signal};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

pub use self::simple_order::simple_order_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        simple_order::get_simple_orders_v1,
        simple_order::get_simple_orders_v2,
        simple_order::get_simple_orders_v3,
        simple_order::get_simple_orders_v4,
    ),
    tags(
        (name = "Simple-order", description = "Order listings with member and delivery"),
    )
)]
struct ApiDoc;

async fn fallback_handler() -> HttpError {
    HttpError::NotFound("Route not found".into())
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(simple_order_routes(shared_state));

        let (app_router, api) = api_router.split_for_parts();

        app_router
            .route(
                "/api-docs/openapi.json",
                get(move || async move { Json(api) }),
            )
            .fallback(fallback_handler)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 OpenAPI document: http://localhost:{port}/api-docs/openapi.json");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
