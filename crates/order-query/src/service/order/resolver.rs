use crate::{
    abstract_trait::order::repository::OrderQueryRepositoryTrait,
    model::{Delivery, Member, Order, OrderRecord},
};
use shared::errors::RepositoryError;
use std::collections::HashMap;
use tracing::debug;

/// Turns bare order rows into full orders by looking up each association on
/// its own. Lookups are remembered by id for the lifetime of the resolver, so
/// one request never fetches the same member or delivery twice.
pub(crate) struct AssociationResolver<'a> {
    repo: &'a (dyn OrderQueryRepositoryTrait + Send + Sync),
    members: HashMap<i64, Member>,
    deliveries: HashMap<i64, Delivery>,
    round_trips: u64,
}

impl<'a> AssociationResolver<'a> {
    pub(crate) fn new(repo: &'a (dyn OrderQueryRepositoryTrait + Send + Sync)) -> Self {
        Self {
            repo,
            members: HashMap::new(),
            deliveries: HashMap::new(),
            round_trips: 0,
        }
    }

    /// Queries issued so far.
    pub(crate) fn round_trips(&self) -> u64 {
        self.round_trips
    }

    pub(crate) async fn resolve(&mut self, record: OrderRecord) -> Result<Order, RepositoryError> {
        let member = self.member(record.member_id).await?;
        let delivery = self.delivery(record.delivery_id).await?;

        Ok(Order::from_record(record, member, delivery))
    }

    async fn member(&mut self, id: i64) -> Result<Member, RepositoryError> {
        if let Some(member) = self.members.get(&id) {
            return Ok(member.clone());
        }

        debug!("🔎 Resolving member {id}");
        self.round_trips += 1;

        let member = self
            .repo
            .find_member_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(format!("member {id}")))?;

        self.members.insert(id, member.clone());
        Ok(member)
    }

    async fn delivery(&mut self, id: i64) -> Result<Delivery, RepositoryError> {
        if let Some(delivery) = self.deliveries.get(&id) {
            return Ok(delivery.clone());
        }

        debug!("🔎 Resolving delivery {id}");
        self.round_trips += 1;

        let delivery = self
            .repo
            .find_delivery_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(format!("delivery {id}")))?;

        self.deliveries.insert(id, delivery.clone());
        Ok(delivery)
    }
}
