use chrono::Utc;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Checkout request body
///
/// All four fields are required; the names must be non-empty and `cart`
/// must be an array of product ids (24-character hex strings). An empty
/// cart is accepted.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "firstName": "Ada",
    "lastName": "Lovelace",
    "phone": "07123456789",
    "cart": ["65f1c0ffee0000000000beef", "65f1c0ffee0000000000cafe"]
}))]
pub struct CreateOrder {
    #[validate(length(min = 1, message = "firstName must not be empty"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "lastName must not be empty"))]
    pub last_name: String,

    #[validate(length(min = 1, message = "phone must not be empty"))]
    pub phone: String,

    /// Product identifiers, as returned in `_id` by `GET /products`
    #[validate(custom(function = "validate_product_ids"))]
    pub cart: Vec<String>,
}

fn validate_product_ids(cart: &[String]) -> Result<(), ValidationError> {
    if cart.iter().all(|id| ObjectId::parse_str(id).is_ok()) {
        return Ok(());
    }

    Err(ValidationError::new("product_id")
        .with_message("cart entries must be 24-character hex product ids".into()))
}

/// Order document as persisted in the `orders` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub items: Vec<String>,
    /// Set by the server when the order is accepted
    pub order_date: DateTime,
}

impl Order {
    /// Stamp a validated checkout with the current time
    pub fn new(input: CreateOrder) -> Self {
        Self::placed_at(input, DateTime::from_millis(Utc::now().timestamp_millis()))
    }

    pub fn placed_at(input: CreateOrder, order_date: DateTime) -> Self {
        Self {
            id: None,
            first_name: input.first_name,
            last_name: input.last_name,
            phone: input.phone,
            items: input.cart,
            order_date,
        }
    }
}

/// Body returned by `POST /orders`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub success: bool,
    /// Hex ObjectId of the stored order
    pub order_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;
    use serde_json::{json, Value};

    fn checkout(value: Value) -> CreateOrder {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_create_order_reads_camel_case() {
        let input = checkout(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "phone": "0712",
            "cart": ["65f1c0ffee0000000000beef", "65f1c0ffee0000000000cafe"]
        }));
        assert_eq!(input.first_name, "Ada");
        assert_eq!(input.cart.len(), 2);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_empty_name_fails_validation() {
        let input = checkout(json!({
            "firstName": "",
            "lastName": "Lovelace",
            "phone": "0712",
            "cart": []
        }));
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 1);
    }

    #[test]
    fn test_cart_entries_must_be_product_ids() {
        for cart in [json!(["abc123"]), json!(["65f1c0ffee0000000000beef", ""])] {
            let input = checkout(json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "phone": "0712",
                "cart": cart
            }));
            let errors = input.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("cart"));
        }
    }

    #[test]
    fn test_cart_must_be_a_sequence() {
        let result = serde_json::from_value::<CreateOrder>(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "phone": "0712",
            "cart": "65f1c0ffee0000000000beef"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_order_document_shape() {
        let placed = DateTime::from_millis(1_700_000_000_000);
        let order = Order::placed_at(
            checkout(json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "phone": "0712",
                "cart": ["65f1c0ffee0000000000beef"]
            })),
            placed,
        );

        let document = bson::to_document(&order).unwrap();
        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("firstName").unwrap(), "Ada");
        assert_eq!(document.get_array("items").unwrap().len(), 1);
        assert_eq!(*document.get_datetime("orderDate").unwrap(), placed);
        assert!(!document.contains_key("cart"));
    }
}
