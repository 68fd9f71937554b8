//! 发货创建客户端
//!
//! 向发货服务发起创建请求。与支付客户端一样是尽力通知。

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use shared::models::Order;

// TODO: derive the destination from a shipping address once the order
// carries one; the source system sends this fixed value.
const DESTINATION_POSTAL_CODE: &str = "00000";

/// Request body for `POST {shipping}/shipments`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateShipmentRequest<'a> {
    order_id: &'a str,
    destination_postal_code: &'a str,
}

/// Shipment acknowledgment from the shipping service. Advisory only.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    #[serde(default)]
    pub shipment_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// HTTP client for the shipment-creation service.
#[derive(Debug, Clone)]
pub struct ShippingClient {
    client: Client,
    base_url: String,
}

impl ShippingClient {
    /// Create the client with a bounded per-call timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Attempt a shipment creation, exactly once.
    ///
    /// Any failure is logged and swallowed; the caller receives `None` and
    /// proceeds regardless.
    pub async fn create_shipment(&self, order: &Order) -> Option<Shipment> {
        let url = format!("{}/shipments", self.base_url.trim_end_matches('/'));
        let body = CreateShipmentRequest {
            order_id: &order.id,
            destination_postal_code: DESTINATION_POSTAL_CODE,
        };

        let response = match self.client.post(&url).json(&body).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(order_id = %order.id, error = %e, "shipment creation call failed");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(order_id = %order.id, %status, "shipment creation rejected");
            return None;
        }

        match response.json::<Shipment>().await {
            Ok(shipment) => {
                tracing::debug!(
                    order_id = %order.id,
                    shipment_id = ?shipment.shipment_id,
                    "shipment creation acknowledged"
                );
                Some(shipment)
            }
            Err(e) => {
                tracing::warn!(order_id = %order.id, error = %e, "shipment creation response unreadable");
                None
            }
        }
    }
}
