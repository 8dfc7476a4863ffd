//! Order Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::OrderResult;
use crate::models::{CreateOrder, Order};
use crate::repository::OrderRepository;

pub struct OrderService<R: OrderRepository> {
    repository: Arc<R>,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate, stamp `orderDate` and persist a checkout
    ///
    /// Returns the stored order with its `_id` filled in.
    #[instrument(skip(self, input), fields(items = input.cart.len()))]
    pub async fn create_order(&self, input: CreateOrder) -> OrderResult<Order> {
        input.validate()?;

        let mut order = Order::new(input);
        let id = self.repository.create(&order).await?;
        order.id = Some(id);

        Ok(order)
    }
}
