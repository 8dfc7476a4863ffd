use mongodb::bson::{self, oid::ObjectId, Bson, Document};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};

use crate::error::{ProductError, ProductResult};

/// Fields a search term is matched against, in `$or` order.
///
/// `price`, `rating` and `availableInventory` are usually numbers and only
/// match when a document stores them as strings.
pub const SEARCHABLE_FIELDS: [&str; 5] = [
    "subject",
    "location",
    "price",
    "rating",
    "availableInventory",
];

/// A product document as stored.
///
/// No schema is enforced beyond `_id`; every other field is passed through.
/// Serializes as relaxed extended JSON with `_id` flattened to its hex string.
#[derive(Debug, Clone, PartialEq, ToSchema)]
#[schema(
    value_type = Object,
    example = json!({
        "_id": "65f1c0ffee0000000000beef",
        "subject": "Math",
        "location": "London",
        "price": 100,
        "rating": 4,
        "availableInventory": 5
    })
)]
pub struct Product(Document);

impl Product {
    /// The document's `_id`, if it is an ObjectId.
    pub fn id(&self) -> Option<ObjectId> {
        self.0.get_object_id("_id").ok()
    }

    pub fn get(&self, key: &str) -> Option<&Bson> {
        self.0.get(key)
    }

    pub fn document(&self) -> &Document {
        &self.0
    }

    pub fn into_document(self) -> Document {
        self.0
    }

    pub fn to_json(&self) -> Value {
        let mut value = Bson::Document(self.0.clone()).into_relaxed_extjson();
        if let (Some(id), Value::Object(map)) = (self.id(), &mut value) {
            map.insert("_id".to_string(), Value::String(id.to_hex()));
        }
        value
    }
}

impl From<Document> for Product {
    fn from(document: Document) -> Self {
        Self(document)
    }
}

impl Serialize for Product {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// A non-empty set of fields to `$set` on one product.
///
/// Keys are not checked against any allow-list.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPatch(Document);

impl ProductPatch {
    /// Build a patch from a JSON object body.
    pub fn from_json(fields: Map<String, Value>) -> ProductResult<Self> {
        if fields.is_empty() {
            return Err(ProductError::Validation(
                "Update body must contain at least one field".to_string(),
            ));
        }

        bson::to_document(&fields)
            .map(Self)
            .map_err(|e| ProductError::Validation(format!("Unsupported update value: {}", e)))
    }

    pub fn fields(&self) -> &Document {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_document(self) -> Document {
        self.0
    }
}

/// Query string for `GET /search`
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Free-text term, matched case-insensitively as a substring
    pub query: Option<String>,
}

/// A validated, trimmed search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSearch {
    term: String,
}

impl ProductSearch {
    /// Rejects a missing or blank query.
    pub fn parse(raw: Option<&str>) -> ProductResult<Self> {
        let term = raw.map(str::trim).unwrap_or_default();
        if term.is_empty() {
            return Err(ProductError::Validation(
                "Query parameter 'query' is required".to_string(),
            ));
        }

        Ok(Self {
            term: term.to_string(),
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// The term as a literal regex, so `.` or `(` in user input match themselves.
    pub fn pattern(&self) -> String {
        regex::escape(&self.term)
    }
}

/// Result of applying a patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateOutcome {
    pub matched: u64,
    pub modified: u64,
}

/// Body returned by `PUT /products/{id}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductResponse {
    pub success: bool,
    /// Documents actually changed; 0 when the submitted values were already stored
    pub updated_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;
    use serde_json::json;

    #[test]
    fn test_product_serializes_id_as_hex() {
        let id = ObjectId::parse_str("65f1c0ffee0000000000beef").unwrap();
        let product = Product::from(doc! {
            "_id": id,
            "subject": "Math",
            "price": 100,
            "rating": 4.5,
        });

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["_id"], "65f1c0ffee0000000000beef");
        assert_eq!(value["subject"], "Math");
        assert_eq!(value["price"], 100);
        assert_eq!(value["rating"], 4.5);
    }

    #[test]
    fn test_product_without_object_id_keeps_raw_id() {
        let product = Product::from(doc! { "_id": "legacy-1", "subject": "Art" });
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["_id"], "legacy-1");
        assert!(product.id().is_none());
    }

    #[test]
    fn test_patch_rejects_empty_body() {
        let err = ProductPatch::from_json(Map::new()).unwrap_err();
        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[test]
    fn test_patch_keeps_all_fields() {
        let fields = json!({ "availableInventory": 3, "location": "Paris" });
        let Value::Object(fields) = fields else {
            unreachable!()
        };

        let patch = ProductPatch::from_json(fields).unwrap();
        assert_eq!(patch.len(), 2);
        assert_eq!(patch.fields().get_str("location").unwrap(), "Paris");
        assert_eq!(patch.fields().get_i64("availableInventory").unwrap(), 3);
    }

    #[test]
    fn test_search_trims_and_requires_term() {
        assert!(ProductSearch::parse(None).is_err());
        assert!(ProductSearch::parse(Some("")).is_err());
        assert!(ProductSearch::parse(Some("   ")).is_err());

        let search = ProductSearch::parse(Some("  math ")).unwrap();
        assert_eq!(search.term(), "math");
    }

    #[test]
    fn test_search_pattern_escapes_regex_syntax() {
        let search = ProductSearch::parse(Some("c++ (adv)")).unwrap();
        assert_eq!(search.pattern(), r"c\+\+ \(adv\)");
    }

    #[test]
    fn test_update_response_is_camel_case() {
        let body = serde_json::to_value(UpdateProductResponse {
            success: true,
            updated_count: 1,
        })
        .unwrap();
        assert_eq!(body, json!({ "success": true, "updatedCount": 1 }));
    }
}
