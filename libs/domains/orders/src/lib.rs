//! Orders Domain
//!
//! Accepts storefront checkouts and stores them in the `orders` collection.
//! Orders are write-once: there is no read, update or delete endpoint.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_orders::{handlers, MongoOrderRepository, OrderService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("webstore");
//!
//! let service = OrderService::new(MongoOrderRepository::new(&db));
//!
//! // Serves POST /orders
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{OrderError, OrderResult};
pub use handlers::ApiDoc;
pub use models::{CreateOrder, CreateOrderResponse, Order};
pub use mongodb::MongoOrderRepository;
pub use repository::OrderRepository;
pub use service::OrderService;
