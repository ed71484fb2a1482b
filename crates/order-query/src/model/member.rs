use crate::model::Address;
use sqlx::FromRow;

/// The customer who placed an order. Holds no reference back to its orders.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Member {
    #[sqlx(rename = "member_id")]
    pub id: i64,
    pub name: String,
    #[sqlx(flatten)]
    pub address: Address,
}
