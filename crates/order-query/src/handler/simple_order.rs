use crate::{
    abstract_trait::order::service::DynOrderSimpleQueryService,
    domain::response::{OrderResponse, SimpleOrderResponse},
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/v1/simple-orders",
    tag = "Simple-order",
    responses(
        (status = 200, description = "Orders with member and delivery", body = Vec<OrderResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_simple_orders_v1(
    Extension(service): Extension<DynOrderSimpleQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_order_entities().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/v2/simple-orders",
    tag = "Simple-order",
    responses(
        (status = 200, description = "Simple orders, associations looked up per order", body = Vec<SimpleOrderResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_simple_orders_v2(
    Extension(service): Extension<DynOrderSimpleQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_orders_resolved().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/v3/simple-orders",
    tag = "Simple-order",
    responses(
        (status = 200, description = "Simple orders loaded with one join query", body = Vec<SimpleOrderResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_simple_orders_v3(
    Extension(service): Extension<DynOrderSimpleQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_orders_fetch_join().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/v4/simple-orders",
    tag = "Simple-order",
    responses(
        (status = 200, description = "Simple orders selected directly as views", body = Vec<SimpleOrderResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_simple_orders_v4(
    Extension(service): Extension<DynOrderSimpleQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_order_projections().await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn simple_order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/v1/simple-orders", get(get_simple_orders_v1))
        .route("/api/v2/simple-orders", get(get_simple_orders_v2))
        .route("/api/v3/simple-orders", get(get_simple_orders_v3))
        .route("/api/v4/simple-orders", get(get_simple_orders_v4))
        .layer(Extension(app_state.di_container.order_simple_query.clone()))
}
