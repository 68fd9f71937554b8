//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::util::canonical_time;

/// 订单状态
///
/// 本服务可见的状态迁移是单向的：订单以 `PendingPayment` 创建，
/// 取消操作无条件覆盖为 `Cancelled`（幂等，不校验前置状态）。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    PendingPayment,
    Confirmed,
    Shipped,
    Cancelled,
}

impl OrderStatus {
    /// Parse a wire-format status string (`"PENDING_PAYMENT"`, ...).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "PENDING_PAYMENT" => Some(Self::PendingPayment),
            "CONFIRMED" => Some(Self::Confirmed),
            "SHIPPED" => Some(Self::Shipped),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// Order line item. Immutable once attached to an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub sku: String,
    pub quantity: u32,
    /// Price in currency unit (plain float, no currency-precision handling)
    pub unit_price: f64,
}

impl OrderItem {
    /// Line subtotal: `unit_price × quantity`
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Order aggregate
///
/// # Invariants
///
/// - `id` is assigned exactly once at creation
/// - `total_amount` is the sum over `items` at construction time and is
///   never recomputed afterwards
/// - `items` is non-empty
/// - `cancelled_at` is set if and only if `status` is `Cancelled`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    #[serde(with = "canonical_time")]
    pub created_at: DateTime<Utc>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "canonical_time::option"
    )]
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Produce the cancelled copy of this order.
    ///
    /// Unconditional overwrite: no status-transition guard, so cancelling
    /// an already-cancelled or shipped order succeeds and refreshes
    /// `cancelled_at`.
    pub fn cancelled(mut self, at: DateTime<Utc>) -> Self {
        self.status = OrderStatus::Cancelled;
        self.cancelled_at = Some(at);
        self
    }
}
