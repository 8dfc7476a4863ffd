//! Custom extractors for Axum handlers.
//!
//! These extractors turn malformed input into the standard `AppError`
//! responses instead of axum's plain-text rejections.

pub mod json_body;
pub mod object_id_path;
pub mod validated_json;

pub use json_body::JsonBody;
pub use object_id_path::ObjectIdPath;
pub use validated_json::ValidatedJson;
