//! Type-safe error codes for API responses.
//!
//! Each error code includes:
//! - String representation for client consumption (e.g., "VALIDATION_ERROR")
//! - Integer code for logging and monitoring (e.g., 1001)
//! - Default human-readable message
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Request validation failed");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// Path identifier is not a 24-character hex ObjectId
    InvalidObjectId,

    /// Request body is missing, not JSON, or has the wrong shape
    InvalidJson,

    /// Requested resource was not found
    NotFound,

    /// Request is malformed in a way not covered by a more specific code
    BadRequest,

    // Server errors (1000s)
    /// An unexpected internal server error occurred
    InternalError,

    // Database errors (2000-2999)
    /// Database rejected the credentials or configuration
    DatabaseConfig,

    /// Database command failed
    DatabaseError,

    /// Database I/O error
    DatabaseIo,

    /// No reachable database server could be selected
    DatabaseUnavailable,

    /// Failed to decode a document returned by the database
    DatabaseDecode,

    /// Failed to encode a document for the database
    DatabaseEncode,

    /// Database rejected a write
    DatabaseWrite,

    /// Database error without a more specific mapping
    DatabaseUnhandled,
}

impl ErrorCode {
    /// Get the SCREAMING_SNAKE_CASE identifier clients can match on.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidObjectId => "INVALID_OBJECT_ID",
            Self::InvalidJson => "INVALID_JSON",
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::InternalError => "INTERNAL_ERROR",
            Self::DatabaseConfig => "DATABASE_CONFIG",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::DatabaseIo => "DATABASE_IO",
            Self::DatabaseUnavailable => "DATABASE_UNAVAILABLE",
            Self::DatabaseDecode => "DATABASE_DECODE",
            Self::DatabaseEncode => "DATABASE_ENCODE",
            Self::DatabaseWrite => "DATABASE_WRITE",
            Self::DatabaseUnhandled => "DATABASE_UNHANDLED",
        }
    }

    /// Get the integer code for logging and monitoring.
    ///
    /// Ranges:
    /// - 1000-1999: Client and generic server errors
    /// - 2000-2999: Database errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidObjectId => 1002,
            Self::InvalidJson => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::BadRequest => 1006,

            Self::DatabaseConfig => 2002,
            Self::DatabaseError => 2003,
            Self::DatabaseIo => 2004,
            Self::DatabaseUnavailable => 2005,
            Self::DatabaseDecode => 2010,
            Self::DatabaseEncode => 2011,
            Self::DatabaseWrite => 2012,
            Self::DatabaseUnhandled => 2099,
        }
    }

    /// Get the default user-facing error message.
    ///
    /// Database codes all share one generic message so driver details never
    /// reach the client.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidObjectId => "Invalid identifier format",
            Self::InvalidJson => "Invalid JSON body",
            Self::NotFound => "Resource not found",
            Self::BadRequest => "Bad request",
            Self::InternalError => "Internal Server Error",
            Self::DatabaseConfig
            | Self::DatabaseError
            | Self::DatabaseIo
            | Self::DatabaseUnavailable
            | Self::DatabaseDecode
            | Self::DatabaseEncode
            | Self::DatabaseWrite
            | Self::DatabaseUnhandled => "Internal Server Error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
