//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Collection, Database,
};
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{Product, ProductPatch, ProductSearch, UpdateOutcome, SEARCHABLE_FIELDS};
use crate::repository::ProductRepository;

/// Collection the storefront keeps its catalogue in.
pub const PRODUCTS_COLLECTION: &str = "products";

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Document>,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Document>(PRODUCTS_COLLECTION),
        }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Document> {
        &self.collection
    }

    /// `{"$or": [{field: {"$regex": pattern, "$options": "i"}}, ...]}`
    fn build_search_filter(search: &ProductSearch) -> Document {
        let pattern = search.pattern();
        let clauses: Vec<Document> = SEARCHABLE_FIELDS
            .iter()
            .map(|field| {
                let mut clause = Document::new();
                clause.insert(*field, doc! { "$regex": &pattern, "$options": "i" });
                clause
            })
            .collect();

        doc! { "$or": clauses }
    }

    async fn find(&self, filter: Document) -> ProductResult<Vec<Product>> {
        let documents: Vec<Document> = self.collection.find(filter).await?.try_collect().await?;
        Ok(documents.into_iter().map(Product::from).collect())
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let products = self.find(doc! {}).await?;
        tracing::debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    #[instrument(skip(self), fields(term = %search.term()))]
    async fn search(&self, search: &ProductSearch) -> ProductResult<Vec<Product>> {
        let products = self.find(Self::build_search_filter(search)).await?;
        tracing::debug!(count = products.len(), "Searched products");
        Ok(products)
    }

    #[instrument(skip(self, patch), fields(product_id = %id, fields = patch.len()))]
    async fn update(&self, id: ObjectId, patch: ProductPatch) -> ProductResult<UpdateOutcome> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": patch.into_document() })
            .await?;

        tracing::info!(
            matched = result.matched_count,
            modified = result.modified_count,
            "Product update applied"
        );

        Ok(UpdateOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }
}
