//! Order orchestration service
//!
//! Composes validator, builder, downstream clients, store and analytics
//! publisher into the four order operations. Within one request the steps
//! run strictly in order — payment call, shipping call, store insert,
//! response — and only the analytics publish is detached from the
//! response path.

use serde_json::Value;
use uuid::Uuid;

use shared::models::{AnalyticsNotificationEvent, Order};
use shared::util::now;

use crate::analytics::AnalyticsPublisher;
use crate::client::{PaymentClient, ShippingClient};
use crate::core::{AppError, AppResult};
use crate::orders::builder;
use crate::orders::store::OrderStore;
use crate::orders::validate::{self, ListQueryParams};

/// 订单编排服务
#[derive(Clone)]
pub struct OrderService {
    store: OrderStore,
    payment: PaymentClient,
    shipping: ShippingClient,
    publisher: AnalyticsPublisher,
    synthesize_missing: bool,
}

impl OrderService {
    pub fn new(
        store: OrderStore,
        payment: PaymentClient,
        shipping: ShippingClient,
        publisher: AnalyticsPublisher,
        synthesize_missing: bool,
    ) -> Self {
        Self {
            store,
            payment,
            shipping,
            publisher,
            synthesize_missing,
        }
    }

    /// Create an order from a raw JSON payload.
    ///
    /// Validation failures are terminal with no side effects. Downstream
    /// notification failures are tolerated: there is deliberately no
    /// server-fault path here — an unreachable advisory service must not
    /// fail order intake.
    pub async fn create(&self, raw: &Value) -> AppResult<Order> {
        let payload = validate::parse_create_payload(raw)?;
        let payment_method_id = payload.payment_method_id.clone();

        let order = builder::build_order(Uuid::new_v4().to_string(), payload);

        // Best-effort fan-out, sequential: payment first, then shipping.
        // Results are advisory and intentionally discarded — nothing is
        // correlated back into the order.
        let _authorization = self.payment.authorize(&order, &payment_method_id).await;
        let _shipment = self.shipping.create_shipment(&order).await;

        self.store.insert(order.clone());

        self.publisher
            .publish_detached(AnalyticsNotificationEvent::order_created(&order));

        tracing::info!(
            order_id = %order.id,
            customer_id = %order.customer_id,
            total_amount = order.total_amount,
            "order created"
        );

        Ok(order)
    }

    /// Look up an order by id.
    ///
    /// Unknown ids return a synthesized placeholder instead of 404 while
    /// `SYNTHESIZE_MISSING_ORDERS` is on (the default, matching the source
    /// system).
    pub fn get(&self, order_id: &str) -> AppResult<Order> {
        match self.store.get(order_id) {
            Some(order) => Ok(order),
            None if self.synthesize_missing => Ok(builder::placeholder_order(order_id)),
            None => Err(AppError::NotFound(order_id.to_string())),
        }
    }

    /// List orders matching the (validated) query.
    ///
    /// An empty table is seeded on the fly with one placeholder order,
    /// which passes through the same filter path as real data.
    pub fn list(&self, params: &ListQueryParams) -> AppResult<Vec<Order>> {
        let filter = validate::parse_list_query(params)?;

        if self.store.is_empty() && self.synthesize_missing {
            let seed = builder::placeholder_order(builder::PLACEHOLDER_ORDER_ID);
            return Ok([seed].into_iter().filter(|o| filter.matches(o)).collect());
        }

        Ok(self.store.list(&filter))
    }

    /// Cancel an order, unconditionally.
    ///
    /// No status-transition guard: cancelling a shipped or already
    /// cancelled order succeeds and overwrites (idempotent-by-overwrite).
    /// Unknown ids start from the synthesized placeholder.
    pub async fn cancel(&self, order_id: &str, body: Option<&Value>) -> AppResult<Order> {
        let reason = validate::parse_cancel_reason(body)?;

        let base = match self.store.get(order_id) {
            Some(order) => order,
            None if self.synthesize_missing => builder::placeholder_order(order_id),
            None => return Err(AppError::NotFound(order_id.to_string())),
        };

        let order = base.cancelled(now());
        self.store.insert(order.clone());

        self.publisher
            .publish_detached(AnalyticsNotificationEvent::order_cancelled(&order));

        tracing::info!(
            order_id = %order.id,
            reason = reason.as_deref().unwrap_or("-"),
            "order cancelled"
        );

        Ok(order)
    }

    /// Shared handle to the underlying order table.
    pub fn store(&self) -> &OrderStore {
        &self.store
    }
}
