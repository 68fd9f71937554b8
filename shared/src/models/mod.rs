//! Data models
//!
//! Shared between order-server and API consumers. All wire structs use
//! camelCase field names; status-like enums use SCREAMING_SNAKE_CASE.

pub mod notification;
pub mod order;

// Re-exports
pub use notification::*;
pub use order::*;
