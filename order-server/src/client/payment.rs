//! 支付授权客户端
//!
//! 向支付服务发起授权请求。调用结果仅供参考，订单创建不依赖其成功。

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use shared::models::Order;

/// Request body for `POST {payment}/payments/authorize`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthorizePaymentRequest<'a> {
    order_id: &'a str,
    amount: f64,
    currency: &'static str,
    payment_method_id: &'a str,
}

/// Authorization acknowledgment from the payment service.
///
/// Advisory only: nothing in the order is derived from it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAuthorization {
    #[serde(default)]
    pub authorization_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// HTTP client for the payment-authorization service.
#[derive(Debug, Clone)]
pub struct PaymentClient {
    client: Client,
    base_url: String,
}

impl PaymentClient {
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

    /// Attempt a payment authorization, exactly once.
    ///
    /// Any failure is logged and swallowed; the caller receives `None` and
    /// proceeds regardless.
    pub async fn authorize(
        &self,
        order: &Order,
        payment_method_id: &str,
    ) -> Option<PaymentAuthorization> {
        let url = format!(
            "{}/payments/authorize",
            self.base_url.trim_end_matches('/')
        );
        let body = AuthorizePaymentRequest {
            order_id: &order.id,
            amount: order.total_amount,
            currency: "USD",
            payment_method_id,
        };

        let response = match self.client.post(&url).json(&body).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(order_id = %order.id, error = %e, "payment authorization call failed");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(order_id = %order.id, %status, "payment authorization rejected");
            return None;
        }

        match response.json::<PaymentAuthorization>().await {
            Ok(authorization) => {
                tracing::debug!(
                    order_id = %order.id,
                    authorization_id = ?authorization.authorization_id,
                    "payment authorization acknowledged"
                );
                Some(authorization)
            }
            Err(e) => {
                tracing::warn!(order_id = %order.id, error = %e, "payment authorization response unreadable");
                None
            }
        }
    }
}
