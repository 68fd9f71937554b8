//! In-memory order table
//!
//! Single shared table keyed by order id, guarded by one `RwLock`.
//! Contents are volatile across restarts; durability is explicitly out of
//! scope for this service.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use shared::models::Order;

use crate::orders::validate::OrderFilter;

/// Order store backed by a locked hash map.
///
/// `Clone` is shallow: all handles share the same table.
#[derive(Clone, Default)]
pub struct OrderStore {
    orders: Arc<RwLock<HashMap<String, Order>>>,
}

impl OrderStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an order, keyed by its id.
    ///
    /// Overwrite semantics: re-inserting an id replaces the prior value.
    /// Both creation and cancellation go through this path.
    pub fn insert(&self, order: Order) {
        let mut orders = self.orders.write().expect("order table lock poisoned");
        orders.insert(order.id.clone(), order);
    }

    /// Point lookup by order id.
    pub fn get(&self, order_id: &str) -> Option<Order> {
        let orders = self.orders.read().expect("order table lock poisoned");
        orders.get(order_id).cloned()
    }

    /// Filtered listing, ordered by creation time (then id, for stability).
    pub fn list(&self, filter: &OrderFilter) -> Vec<Order> {
        let orders = self.orders.read().expect("order table lock poisoned");
        let mut result: Vec<Order> = orders
            .values()
            .filter(|order| filter.matches(order))
            .cloned()
            .collect();
        result.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        result
    }

    /// Number of stored orders.
    pub fn len(&self) -> usize {
        self.orders.read().expect("order table lock poisoned").len()
    }

    /// Whether the table holds no orders.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
