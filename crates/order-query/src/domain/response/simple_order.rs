use crate::model::{Address, Order, OrderStatus};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Flattened order view served by `/api/v2`, `/api/v3` and `/api/v4`.
/// `address` is where the order ships to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimpleOrderResponse {
    pub order_id: i64,
    pub name: String,
    pub order_date_time: NaiveDateTime,
    pub order_status: OrderStatus,
    pub address: Address,
}

impl From<Order> for SimpleOrderResponse {
    fn from(value: Order) -> Self {
        SimpleOrderResponse {
            order_id: value.id,
            name: value.member.name,
            order_date_time: value.order_date,
            order_status: value.status,
            address: value.delivery.address,
        }
    }
}
