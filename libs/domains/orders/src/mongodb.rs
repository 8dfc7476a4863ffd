//! MongoDB implementation of OrderRepository

use async_trait::async_trait;
use mongodb::{bson::oid::ObjectId, Collection, Database};
use tracing::instrument;

use crate::error::{OrderError, OrderResult};
use crate::models::Order;
use crate::repository::OrderRepository;

pub const ORDERS_COLLECTION: &str = "orders";

/// MongoDB implementation of the OrderRepository
pub struct MongoOrderRepository {
    collection: Collection<Order>,
}

impl MongoOrderRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Order>(ORDERS_COLLECTION),
        }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Order> {
        &self.collection
    }
}

#[async_trait]
impl OrderRepository for MongoOrderRepository {
    #[instrument(skip(self, order), fields(items = order.items.len()))]
    async fn create(&self, order: &Order) -> OrderResult<ObjectId> {
        let result = self.collection.insert_one(order).await?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| OrderError::UnexpectedId(result.inserted_id.to_string()))?;

        tracing::info!(order_id = %id, "Order created successfully");
        Ok(id)
    }
}
