use crate::{
    abstract_trait::order::repository::OrderSimpleQueryRepositoryTrait,
    domain::response::SimpleOrderResponse,
    model::{Address, OrderStatus},
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::FromRow;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderSimpleQueryRepository {
    db: ConnectionPool,
}

impl OrderSimpleQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[derive(FromRow)]
struct OrderSimpleQueryRow {
    order_id: i64,
    name: String,
    order_date: NaiveDateTime,
    #[sqlx(try_from = "String")]
    status: OrderStatus,
    #[sqlx(flatten)]
    address: Address,
}

#[async_trait]
impl OrderSimpleQueryRepositoryTrait for OrderSimpleQueryRepository {
    async fn find_order_dtos(&self) -> Result<Vec<SimpleOrderResponse>, RepositoryError> {
        info!("📦 Fetching order projections");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let rows = sqlx::query_as::<_, OrderSimpleQueryRow>(
            r#"
        SELECT
            o.order_id,
            m.name,
            o.order_date,
            o.status,
            d.city,
            d.street,
            d.zipcode
        FROM orders o
        JOIN member m ON m.member_id = o.member_id
        JOIN delivery d ON d.delivery_id = o.delivery_id
        "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch order projections: {:?}", e);
            RepositoryError::from(e)
        })?;

        let orders = rows
            .into_iter()
            .map(|r| SimpleOrderResponse {
                order_id: r.order_id,
                name: r.name,
                order_date_time: r.order_date,
                order_status: r.status,
                address: r.address,
            })
            .collect();

        Ok(orders)
    }
}
