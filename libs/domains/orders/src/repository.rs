use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::OrderResult;
use crate::models::Order;

/// Repository trait for Order persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert an order and return the identifier the store assigned
    async fn create(&self, order: &Order) -> OrderResult<ObjectId>;
}
