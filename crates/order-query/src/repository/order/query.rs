use crate::{
    abstract_trait::order::repository::OrderQueryRepositoryTrait,
    domain::requests::OrderSearch,
    model::{Address, Delivery, DeliveryStatus, Member, Order, OrderRecord, OrderStatus},
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::FromRow;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[derive(FromRow)]
struct OrderMemberDeliveryRow {
    order_id: i64,
    order_date: NaiveDateTime,
    #[sqlx(try_from = "String")]
    status: OrderStatus,
    member_id: i64,
    member_name: String,
    member_city: String,
    member_street: String,
    member_zipcode: String,
    delivery_id: i64,
    delivery_city: String,
    delivery_street: String,
    delivery_zipcode: String,
    #[sqlx(try_from = "String")]
    delivery_status: DeliveryStatus,
}

impl From<OrderMemberDeliveryRow> for Order {
    fn from(r: OrderMemberDeliveryRow) -> Self {
        Order {
            id: r.order_id,
            member: Member {
                id: r.member_id,
                name: r.member_name,
                address: Address::new(r.member_city, r.member_street, r.member_zipcode),
            },
            delivery: Delivery {
                id: r.delivery_id,
                address: Address::new(r.delivery_city, r.delivery_street, r.delivery_zipcode),
                status: r.delivery_status,
            },
            order_date: r.order_date,
            status: r.status,
        }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all_by_search(
        &self,
        search: &OrderSearch,
    ) -> Result<Vec<OrderRecord>, RepositoryError> {
        info!("📦 Fetching orders with search {:?}", search);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let status = search.order_status.map(|s| s.as_str());
        let member_name = search.member_name_filter();

        let rows = sqlx::query_as::<_, OrderRecord>(
            r#"
        SELECT
            o.order_id,
            o.member_id,
            o.delivery_id,
            o.order_date,
            o.status
        FROM orders o
        JOIN member m ON m.member_id = o.member_id
        WHERE ($1::TEXT IS NULL OR o.status = $1)
          AND ($2::TEXT IS NULL OR m.name LIKE '%' || $2 || '%')
        "#,
        )
        .bind(status)
        .bind(member_name)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch orders: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }

    async fn find_member_by_id(&self, id: i64) -> Result<Option<Member>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let member = sqlx::query_as::<_, Member>(
            r#"
        SELECT member_id, name, city, street, zipcode
        FROM member
        WHERE member_id = $1
        "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch member {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        Ok(member)
    }

    async fn find_delivery_by_id(&self, id: i64) -> Result<Option<Delivery>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let delivery = sqlx::query_as::<_, Delivery>(
            r#"
        SELECT delivery_id, city, street, zipcode, status
        FROM delivery
        WHERE delivery_id = $1
        "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch delivery {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        Ok(delivery)
    }

    async fn find_all_with_member_delivery(&self) -> Result<Vec<Order>, RepositoryError> {
        info!("📦 Fetching orders joined with member and delivery");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let rows = sqlx::query_as::<_, OrderMemberDeliveryRow>(
            r#"
        SELECT
            o.order_id,
            o.order_date,
            o.status,
            m.member_id,
            m.name AS member_name,
            m.city AS member_city,
            m.street AS member_street,
            m.zipcode AS member_zipcode,
            d.delivery_id,
            d.city AS delivery_city,
            d.street AS delivery_street,
            d.zipcode AS delivery_zipcode,
            d.status AS delivery_status
        FROM orders o
        JOIN member m ON m.member_id = o.member_id
        JOIN delivery d ON d.delivery_id = o.delivery_id
        "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch orders with member and delivery: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(rows.into_iter().map(Order::from).collect())
    }
}
