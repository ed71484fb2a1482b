use crate::model::{Address, UnknownStatus};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum DeliveryStatus {
    Ready,
    Comp,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Ready => "READY",
            DeliveryStatus::Comp => "COMP",
        }
    }
}

impl TryFrom<String> for DeliveryStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "READY" => Ok(DeliveryStatus::Ready),
            "COMP" => Ok(DeliveryStatus::Comp),
            _ => Err(UnknownStatus {
                kind: "delivery",
                value,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Delivery {
    #[sqlx(rename = "delivery_id")]
    pub id: i64,
    #[sqlx(flatten)]
    pub address: Address,
    #[sqlx(try_from = "String")]
    pub status: DeliveryStatus,
}
