use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Address {
    pub city: String,
    pub street: String,
    pub zipcode: String,
}

impl Address {
    pub fn new(
        city: impl Into<String>,
        street: impl Into<String>,
        zipcode: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            street: street.into(),
            zipcode: zipcode.into(),
        }
    }
}
