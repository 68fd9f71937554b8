//! Shared types for the order intake service
//!
//! Wire/domain types used by the server and by API consumers:
//! order aggregates, analytics notification events, and the canonical
//! timestamp representation.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    AnalyticsNotificationEvent, NotificationPriority, Order, OrderItem, OrderStatus,
};
