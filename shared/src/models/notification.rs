//! Analytics notification event
//!
//! Transient event published to the analytics broker on significant order
//! lifecycle transitions. Never stored; a fresh `notification_id` is
//! generated per publish attempt.

use serde::{Deserialize, Serialize};

use crate::models::Order;

/// 通知优先级
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationPriority {
    Low,
    #[default]
    Normal,
    High,
}

/// Event body delivered to the analytics topic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsNotificationEvent {
    /// Unique per publish attempt
    pub notification_id: String,
    /// Correlates to the order id
    pub request_id: String,
    pub title: String,
    pub body: String,
    pub priority: NotificationPriority,
}

impl AnalyticsNotificationEvent {
    fn new(
        order: &Order,
        title: impl Into<String>,
        body: String,
        priority: NotificationPriority,
    ) -> Self {
        Self {
            notification_id: uuid::Uuid::new_v4().to_string(),
            request_id: order.id.clone(),
            title: title.into(),
            body,
            priority,
        }
    }

    /// Event for a freshly created order.
    pub fn order_created(order: &Order) -> Self {
        Self::new(
            order,
            "Order created",
            format!(
                "Order {} created for customer {} (total {:.2})",
                order.id, order.customer_id, order.total_amount
            ),
            NotificationPriority::Normal,
        )
    }

    /// Event for a cancelled order.
    pub fn order_cancelled(order: &Order) -> Self {
        Self::new(
            order,
            "Order cancelled",
            format!(
                "Order {} for customer {} was cancelled",
                order.id, order.customer_id
            ),
            NotificationPriority::High,
        )
    }
}
