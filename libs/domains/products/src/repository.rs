use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::ProductResult;
use crate::models::{Product, ProductPatch, ProductSearch, UpdateOutcome};

/// Repository trait for Product persistence
///
/// Implementations report store failures as `ProductError::Database`; a
/// missing document on update is an `UpdateOutcome` with `matched == 0`,
/// not an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every product, in store order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Products where any searchable field contains the term, ignoring case
    async fn search(&self, search: &ProductSearch) -> ProductResult<Vec<Product>>;

    /// `$set` the patch fields on the product with this `_id`
    async fn update(&self, id: ObjectId, patch: ProductPatch) -> ProductResult<UpdateOutcome>;
}
