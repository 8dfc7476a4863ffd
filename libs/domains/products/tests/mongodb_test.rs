//! MongoDB repository tests for Products domain
//!
//! Run against a throwaway container: `cargo test -- --ignored`.

use domain_products::*;
use ::mongodb::bson::{doc, oid::ObjectId, Document};
use serde_json::{json, Map, Value};
use test_utils::{TestDataBuilder, TestMongo};

fn fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected a JSON object"),
    }
}

async fn seeded(mongo: &TestMongo, test_name: &str) -> (MongoProductRepository, ObjectId) {
    let builder = TestDataBuilder::from_test_name(test_name);
    let db = mongo.database(&builder.name("db", "products"));
    let repo = MongoProductRepository::new(&db);

    let math = builder.object_id(1);
    repo.collection()
        .insert_many(vec![
            doc! { "_id": math, "subject": "Math", "location": "London", "price": 100, "rating": 4, "availableInventory": 5 },
            doc! { "_id": builder.object_id(2), "subject": "MATH101", "location": "Oxford", "price": 80, "rating": 3, "availableInventory": 2 },
            doc! { "_id": builder.object_id(3), "subject": "English", "location": "Bath", "price": "75", "rating": 5, "availableInventory": 9 },
        ])
        .await
        .unwrap();

    (repo, math)
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_search_matches_case_insensitively() {
    let mongo = TestMongo::new().await;
    let (repo, _) = seeded(&mongo, "mongo_search_case").await;
    let service = ProductService::new(repo);

    let products = service.search_products(Some("math")).await.unwrap();
    let mut subjects: Vec<String> = products
        .iter()
        .map(|p| p.get("subject").unwrap().as_str().unwrap().to_string())
        .collect();
    subjects.sort();
    assert_eq!(subjects, vec!["MATH101", "Math"]);

    let none = service.search_products(Some("chemistry")).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_search_matches_numeric_field_only_when_stored_as_string() {
    let mongo = TestMongo::new().await;
    let (repo, _) = seeded(&mongo, "mongo_search_numeric").await;
    let service = ProductService::new(repo);

    // "75" is stored as a string; 100 and 80 are numbers
    assert_eq!(service.search_products(Some("75")).await.unwrap().len(), 1);
    assert!(service.search_products(Some("100")).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_update_sets_only_supplied_fields() {
    let mongo = TestMongo::new().await;
    let (repo, math) = seeded(&mongo, "mongo_update_partial").await;
    let collection = repo.collection().clone();
    let service = ProductService::new(repo);

    let modified = service
        .update_product(math, fields(json!({ "availableInventory": 4 })))
        .await
        .unwrap();
    assert_eq!(modified, 1);

    let stored: Document = collection
        .find_one(doc! { "_id": math })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.get_i64("availableInventory").unwrap(), 4);
    assert_eq!(stored.get_str("subject").unwrap(), "Math");

    // Same value again: matched, nothing modified
    let modified = service
        .update_product(math, fields(json!({ "availableInventory": 4 })))
        .await
        .unwrap();
    assert_eq!(modified, 0);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_update_unknown_id_is_not_found() {
    let mongo = TestMongo::new().await;
    let (repo, _) = seeded(&mongo, "mongo_update_missing").await;
    let service = ProductService::new(repo);

    let err = service
        .update_product(ObjectId::new(), fields(json!({ "price": 1 })))
        .await
        .unwrap_err();
    assert!(matches!(err, ProductError::NotFound(_)));
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_concurrent_disjoint_updates_both_apply() {
    let mongo = TestMongo::new().await;
    let (repo, math) = seeded(&mongo, "mongo_update_concurrent").await;
    let collection = repo.collection().clone();
    let service = std::sync::Arc::new(ProductService::new(repo));

    let first = {
        let service = service.clone();
        tokio::spawn(async move {
            service
                .update_product(math, fields(json!({ "location": "Leeds" })))
                .await
        })
    };
    let second = {
        let service = service.clone();
        tokio::spawn(async move {
            service
                .update_product(math, fields(json!({ "rating": 2 })))
                .await
        })
    };

    first.await.unwrap().unwrap();
    second.await.unwrap().unwrap();

    let stored: Document = collection
        .find_one(doc! { "_id": math })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.get_str("location").unwrap(), "Leeds");
    assert_eq!(stored.get_i64("rating").unwrap(), 2);
}
