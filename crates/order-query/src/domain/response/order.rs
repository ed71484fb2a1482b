use crate::model::{Address, Delivery, DeliveryStatus, Member, Order, OrderStatus};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MemberResponse {
    pub id: i64,
    pub name: String,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeliveryResponse {
    pub id: i64,
    pub address: Address,
    pub status: DeliveryStatus,
}

/// The whole order graph as returned by `/api/v1/simple-orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i64,
    pub member: MemberResponse,
    pub delivery: DeliveryResponse,
    pub order_date: NaiveDateTime,
    pub status: OrderStatus,
}

impl From<Member> for MemberResponse {
    fn from(value: Member) -> Self {
        MemberResponse {
            id: value.id,
            name: value.name,
            address: value.address,
        }
    }
}

impl From<Delivery> for DeliveryResponse {
    fn from(value: Delivery) -> Self {
        DeliveryResponse {
            id: value.id,
            address: value.address,
            status: value.status,
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        OrderResponse {
            id: value.id,
            member: value.member.into(),
            delivery: value.delivery.into(),
            order_date: value.order_date,
            status: value.status,
        }
    }
}
