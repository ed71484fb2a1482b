#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use chrono::{NaiveDate, NaiveDateTime};
use order_query::{
    abstract_trait::order::repository::{
        DynOrderQueryRepository, DynOrderSimpleQueryRepository, OrderQueryRepositoryTrait,
        OrderSimpleQueryRepositoryTrait,
    },
    di::DependenciesInject,
    domain::{requests::OrderSearch, response::SimpleOrderResponse},
    handler::AppRouter,
    model::{Address, Delivery, DeliveryStatus, Member, Order, OrderRecord, OrderStatus},
    service::order::OrderSimpleQueryService,
    state::AppState,
};
use prometheus_client::registry::Registry;
use serde_json::Value;
use shared::errors::RepositoryError;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use tower::ServiceExt;

/// Table-backed stand-in for the postgres repositories. Lookups behave like
/// the SQL they replace (inner joins drop orders with dangling references)
/// and every query is counted.
#[derive(Default)]
pub struct InMemoryOrderStore {
    pub members: Vec<Member>,
    pub deliveries: Vec<Delivery>,
    pub orders: Vec<OrderRecord>,
    pub listing_queries: AtomicUsize,
    pub member_lookups: AtomicUsize,
    pub delivery_lookups: AtomicUsize,
    pub join_queries: AtomicUsize,
    pub projection_queries: AtomicUsize,
}

impl InMemoryOrderStore {
    pub fn with_member(mut self, id: i64, name: &str, address: Address) -> Self {
        self.members.push(Member {
            id,
            name: name.to_string(),
            address,
        });
        self
    }

    pub fn with_delivery(mut self, id: i64, address: Address) -> Self {
        self.deliveries.push(Delivery {
            id,
            address,
            status: DeliveryStatus::Ready,
        });
        self
    }

    pub fn with_order(
        mut self,
        order_id: i64,
        member_id: i64,
        delivery_id: i64,
        order_date: NaiveDateTime,
        status: OrderStatus,
    ) -> Self {
        self.orders.push(OrderRecord {
            order_id,
            member_id,
            delivery_id,
            order_date,
            status,
        });
        self
    }

    fn member(&self, id: i64) -> Option<Member> {
        self.members.iter().find(|m| m.id == id).cloned()
    }

    fn delivery(&self, id: i64) -> Option<Delivery> {
        self.deliveries.iter().find(|d| d.id == id).cloned()
    }

    fn joined(&self) -> Vec<Order> {
        self.orders
            .iter()
            .filter_map(|record| {
                let member = self.member(record.member_id)?;
                let delivery = self.delivery(record.delivery_id)?;
                Some(Order::from_record(record.clone(), member, delivery))
            })
            .collect()
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for InMemoryOrderStore {
    async fn find_all_by_search(
        &self,
        search: &OrderSearch,
    ) -> Result<Vec<OrderRecord>, RepositoryError> {
        self.listing_queries.fetch_add(1, Ordering::SeqCst);

        let records = self
            .orders
            .iter()
            .filter(|record| {
                search
                    .order_status
                    .is_none_or(|status| status == record.status)
            })
            .filter(|record| match search.member_name_filter() {
                None => true,
                Some(name) => self
                    .member(record.member_id)
                    .is_some_and(|m| m.name.contains(name)),
            })
            .cloned()
            .collect();

        Ok(records)
    }

    async fn find_member_by_id(&self, id: i64) -> Result<Option<Member>, RepositoryError> {
        self.member_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.member(id))
    }

    async fn find_delivery_by_id(&self, id: i64) -> Result<Option<Delivery>, RepositoryError> {
        self.delivery_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.delivery(id))
    }

    async fn find_all_with_member_delivery(&self) -> Result<Vec<Order>, RepositoryError> {
        self.join_queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.joined())
    }
}

#[async_trait]
impl OrderSimpleQueryRepositoryTrait for InMemoryOrderStore {
    async fn find_order_dtos(&self) -> Result<Vec<SimpleOrderResponse>, RepositoryError> {
        self.projection_queries.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .joined()
            .into_iter()
            .map(SimpleOrderResponse::from)
            .collect())
    }
}

/// Every query fails as if the database were unreachable.
pub struct UnavailableStore;

#[async_trait]
impl OrderQueryRepositoryTrait for UnavailableStore {
    async fn find_all_by_search(
        &self,
        _search: &OrderSearch,
    ) -> Result<Vec<OrderRecord>, RepositoryError> {
        Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn find_member_by_id(&self, _id: i64) -> Result<Option<Member>, RepositoryError> {
        Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn find_delivery_by_id(&self, _id: i64) -> Result<Option<Delivery>, RepositoryError> {
        Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn find_all_with_member_delivery(&self) -> Result<Vec<Order>, RepositoryError> {
        Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut))
    }
}

#[async_trait]
impl OrderSimpleQueryRepositoryTrait for UnavailableStore {
    async fn find_order_dtos(&self) -> Result<Vec<SimpleOrderResponse>, RepositoryError> {
        Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut))
    }
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, min, 0))
        .expect("valid timestamp")
}

pub fn seoul() -> Address {
    Address::new("Seoul", "Main St", "12345")
}

/// One order placed by Alice, shipped to Seoul/Main St/12345.
pub fn alice_store() -> InMemoryOrderStore {
    InMemoryOrderStore::default()
        .with_member(1, "Alice", seoul())
        .with_delivery(1, seoul())
        .with_order(1, 1, 1, at(2024, 1, 1, 10, 0), OrderStatus::Order)
}

/// Three orders from two members, each with its own delivery.
pub fn shared_member_store() -> InMemoryOrderStore {
    let busan = Address::new("Busan", "Harbor Rd", "48000");

    InMemoryOrderStore::default()
        .with_member(1, "Alice", seoul())
        .with_member(2, "Bob", busan.clone())
        .with_delivery(10, seoul())
        .with_delivery(11, seoul())
        .with_delivery(12, busan)
        .with_order(1, 1, 10, at(2024, 1, 1, 10, 0), OrderStatus::Order)
        .with_order(2, 1, 11, at(2024, 1, 2, 9, 30), OrderStatus::Cancel)
        .with_order(3, 2, 12, at(2024, 1, 3, 18, 45), OrderStatus::Order)
}

/// `count` orders from a single member, each shipped to its own delivery.
pub fn bulk_store(count: i64) -> InMemoryOrderStore {
    (1..=count).fold(
        InMemoryOrderStore::default().with_member(1, "Alice", seoul()),
        |store, id| {
            let status = if id % 2 == 0 {
                OrderStatus::Cancel
            } else {
                OrderStatus::Order
            };
            store
                .with_delivery(id, Address::new("Seoul", format!("Lane {id}"), "12345"))
                .with_order(id, 1, id, at(2024, 1, 1, 10, 0), status)
        },
    )
}

pub fn service_over(store: Arc<InMemoryOrderStore>) -> OrderSimpleQueryService {
    OrderSimpleQueryService::new(
        store.clone() as DynOrderQueryRepository,
        store as DynOrderSimpleQueryRepository,
        &mut Registry::default(),
    )
}

pub fn app_over<R>(store: Arc<R>) -> Router
where
    R: OrderQueryRepositoryTrait + OrderSimpleQueryRepositoryTrait + Send + Sync + 'static,
{
    let mut registry = Registry::default();
    let di_container = DependenciesInject::from_repositories(
        store.clone() as DynOrderQueryRepository,
        store as DynOrderSimpleQueryRepository,
        &mut registry,
    );

    AppRouter::build(AppState::from_parts(di_container, registry))
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request");

    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");

    (status, bytes.to_vec())
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, bytes) = get(app, uri).await;
    let json = serde_json::from_slice(&bytes).expect("json body");
    (status, json)
}
