mod common;

use common::{InMemoryOrderStore, alice_store, at, seoul, service_over, shared_member_store};
use order_query::{
    abstract_trait::order::service::OrderSimpleQueryServiceTrait,
    metrics::Operation,
    model::OrderStatus,
};
use shared::errors::{RepositoryError, ServiceError};
use std::sync::{Arc, atomic::Ordering};

#[tokio::test]
async fn every_strategy_yields_the_same_view() {
    let service = service_over(Arc::new(shared_member_store()));

    let resolved = service.find_orders_resolved().await.unwrap();
    let joined = service.find_orders_fetch_join().await.unwrap();
    let projected = service.find_order_projections().await.unwrap();

    assert_eq!(resolved.len(), 3);
    assert_eq!(resolved, joined);
    assert_eq!(joined, projected);
}

#[tokio::test]
async fn entities_carry_the_same_name_and_address_as_the_view() {
    let service = service_over(Arc::new(shared_member_store()));

    let entities = service.find_order_entities().await.unwrap();
    let views = service.find_orders_fetch_join().await.unwrap();

    assert_eq!(entities.len(), views.len());
    for (entity, view) in entities.iter().zip(&views) {
        assert_eq!(entity.id, view.order_id);
        assert_eq!(entity.member.name, view.name);
        assert_eq!(entity.delivery.address, view.address);
        assert_eq!(entity.order_date, view.order_date_time);
        assert_eq!(entity.status, view.order_status);
    }
}

#[tokio::test]
async fn repeated_calls_return_equal_results() {
    let service = service_over(Arc::new(shared_member_store()));

    assert_eq!(
        service.find_order_entities().await.unwrap(),
        service.find_order_entities().await.unwrap()
    );
    assert_eq!(
        service.find_orders_resolved().await.unwrap(),
        service.find_orders_resolved().await.unwrap()
    );
    assert_eq!(
        service.find_orders_fetch_join().await.unwrap(),
        service.find_orders_fetch_join().await.unwrap()
    );
    assert_eq!(
        service.find_order_projections().await.unwrap(),
        service.find_order_projections().await.unwrap()
    );
}

#[tokio::test]
async fn empty_store_yields_empty_lists() {
    let service = service_over(Arc::new(InMemoryOrderStore::default()));

    assert!(service.find_order_entities().await.unwrap().is_empty());
    assert!(service.find_orders_resolved().await.unwrap().is_empty());
    assert!(service.find_orders_fetch_join().await.unwrap().is_empty());
    assert!(service.find_order_projections().await.unwrap().is_empty());
}

#[tokio::test]
async fn single_order_scenario() {
    let service = service_over(Arc::new(alice_store()));

    let entities = service.find_order_entities().await.unwrap();
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].id, 1);
    assert_eq!(entities[0].member.name, "Alice");
    assert_eq!(entities[0].status, OrderStatus::Order);

    for views in [
        service.find_orders_resolved().await.unwrap(),
        service.find_orders_fetch_join().await.unwrap(),
        service.find_order_projections().await.unwrap(),
    ] {
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].order_id, 1);
        assert_eq!(views[0].name, "Alice");
        assert_eq!(views[0].order_date_time, at(2024, 1, 1, 10, 0));
        assert_eq!(views[0].order_status, OrderStatus::Order);
        assert_eq!(views[0].address, seoul());
    }
}

#[tokio::test]
async fn per_order_resolution_looks_up_each_association_once() {
    let store = Arc::new(shared_member_store());
    let service = service_over(store.clone());

    service.find_order_entities().await.unwrap();

    // two distinct members, three distinct deliveries
    assert_eq!(store.listing_queries.load(Ordering::SeqCst), 1);
    assert_eq!(store.member_lookups.load(Ordering::SeqCst), 2);
    assert_eq!(store.delivery_lookups.load(Ordering::SeqCst), 3);
    assert_eq!(service.metrics.round_trips_of(Operation::OrderEntities), 6);

    service.find_orders_resolved().await.unwrap();
    assert_eq!(service.metrics.round_trips_of(Operation::OrdersResolved), 6);
}

#[tokio::test]
async fn join_and_projection_issue_a_single_query() {
    let store = Arc::new(shared_member_store());
    let service = service_over(store.clone());

    service.find_orders_fetch_join().await.unwrap();
    service.find_order_projections().await.unwrap();

    assert_eq!(store.join_queries.load(Ordering::SeqCst), 1);
    assert_eq!(store.projection_queries.load(Ordering::SeqCst), 1);
    assert_eq!(store.member_lookups.load(Ordering::SeqCst), 0);
    assert_eq!(store.delivery_lookups.load(Ordering::SeqCst), 0);
    assert_eq!(service.metrics.round_trips_of(Operation::OrdersFetchJoin), 1);
    assert_eq!(service.metrics.round_trips_of(Operation::OrderProjections), 1);
}

#[tokio::test]
async fn dangling_member_reference_is_an_error() {
    let store = alice_store().with_order(2, 99, 1, at(2024, 2, 1, 8, 0), OrderStatus::Order);
    let service = service_over(Arc::new(store));

    let err = service.find_orders_resolved().await.unwrap_err();

    match err {
        ServiceError::Repo(RepositoryError::NotFound(what)) => assert_eq!(what, "member 99"),
        other => panic!("unexpected error: {other:?}"),
    }
}
