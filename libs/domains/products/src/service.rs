//! Product Service - Business logic layer

use mongodb::bson::oid::ObjectId;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductPatch, ProductSearch};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Input is validated here, before the repository is touched.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Search products by a raw `query` parameter
    #[instrument(skip(self))]
    pub async fn search_products(&self, query: Option<&str>) -> ProductResult<Vec<Product>> {
        let search = ProductSearch::parse(query)?;
        self.repository.search(&search).await
    }

    /// Apply a partial update and return the modified count
    #[instrument(skip(self, fields), fields(product_id = %id))]
    pub async fn update_product(&self, id: ObjectId, fields: Map<String, Value>) -> ProductResult<u64> {
        let patch = ProductPatch::from_json(fields)?;
        let outcome = self.repository.update(id, patch).await?;

        if outcome.matched == 0 {
            return Err(ProductError::NotFound(id));
        }

        Ok(outcome.modified)
    }
}
