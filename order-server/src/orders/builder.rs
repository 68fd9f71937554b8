//! Order aggregate construction
//!
//! Pure derivation, no I/O: the only non-determinism is the creation
//! timestamp.

use shared::models::{Order, OrderItem, OrderStatus};
use shared::util::now;

use crate::orders::validate::CreateOrderPayload;

/// Id used for the order synthesized when listing an empty table.
pub const PLACEHOLDER_ORDER_ID: &str = "order-0000";

/// Derive a new order aggregate from a validated payload.
///
/// `total_amount` is the exact sum of `unit_price × quantity` over the
/// items, computed once here and never recomputed later. Amounts are plain
/// floats with no currency-precision handling.
pub fn build_order(order_id: String, payload: CreateOrderPayload) -> Order {
    let total_amount = payload.items.iter().map(OrderItem::line_total).sum();

    Order {
        id: order_id,
        customer_id: payload.customer_id,
        status: OrderStatus::PendingPayment,
        items: payload.items,
        total_amount,
        created_at: now(),
        cancelled_at: None,
    }
}

/// Synthesize the placeholder order returned for unknown ids.
///
/// Not real data: the source system fabricates a default order instead of
/// answering 404, and that behavior is preserved behind the
/// `SYNTHESIZE_MISSING_ORDERS` switch.
pub fn placeholder_order(order_id: &str) -> Order {
    let items = vec![OrderItem {
        sku: "SAMPLE-SKU".to_string(),
        quantity: 1,
        unit_price: 10.0,
    }];
    let total_amount = items.iter().map(OrderItem::line_total).sum();

    Order {
        id: order_id.to_string(),
        customer_id: "demo-customer".to_string(),
        status: OrderStatus::Confirmed,
        items,
        total_amount,
        created_at: now(),
        cancelled_at: None,
    }
}
