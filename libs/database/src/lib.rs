//! Database library providing MongoDB connection management
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB connector, config and health checks
//! - `config` - Configuration support with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, connect_from_config};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "webstore");
//! let client = connect_from_config(&config).await?;
//! let db = client.database(config.database());
//! ```

#[cfg(feature = "mongodb")]
pub mod mongodb;
