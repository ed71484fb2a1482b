use crate::model::{Delivery, Member, UnknownStatus};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Order,
    Cancel,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Order => "ORDER",
            OrderStatus::Cancel => "CANCEL",
        }
    }
}

impl TryFrom<String> for OrderStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "ORDER" => Ok(OrderStatus::Order),
            "CANCEL" => Ok(OrderStatus::Cancel),
            _ => Err(UnknownStatus {
                kind: "order",
                value,
            }),
        }
    }
}

/// A bare `orders` row: associations are still ids.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct OrderRecord {
    pub order_id: i64,
    pub member_id: i64,
    pub delivery_id: i64,
    pub order_date: NaiveDateTime,
    #[sqlx(try_from = "String")]
    pub status: OrderStatus,
}

/// An order with both associations resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: i64,
    pub member: Member,
    pub delivery: Delivery,
    pub order_date: NaiveDateTime,
    pub status: OrderStatus,
}

impl Order {
    pub fn from_record(record: OrderRecord, member: Member, delivery: Delivery) -> Self {
        Self {
            id: record.order_id,
            member,
            delivery,
            order_date: record.order_date,
            status: record.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeliveryStatus;

    #[test]
    fn statuses_parse_from_their_stored_form() {
        for status in [OrderStatus::Order, OrderStatus::Cancel] {
            assert_eq!(
                OrderStatus::try_from(status.as_str().to_string()).unwrap(),
                status
            );
        }
        for status in [DeliveryStatus::Ready, DeliveryStatus::Comp] {
            assert_eq!(
                DeliveryStatus::try_from(status.as_str().to_string()).unwrap(),
                status
            );
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = OrderStatus::try_from("order".to_string()).unwrap_err();
        assert_eq!(err.kind, "order");
        assert_eq!(err.to_string(), "unknown order status: 'order'");
    }

    #[test]
    fn status_serializes_upper_case() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Cancel).unwrap(),
            "\"CANCEL\""
        );
        assert_eq!(
            serde_json::to_string(&DeliveryStatus::Comp).unwrap(),
            "\"COMP\""
        );
    }
}
