//! Input validation
//!
//! Raw JSON in, well-typed payload out. Checks run in a fixed order and
//! short-circuit on the first failure. The rejection reason is logged for
//! operators but the HTTP response carries only the generic message — the
//! error surface deliberately does not reveal which field failed.

use chrono::DateTime;
use serde::Deserialize;
use serde_json::Value;

use crate::core::{AppError, AppResult};
use shared::models::{Order, OrderItem, OrderStatus};
use shared::util::canonical_timestamp;

/// Maximum length of a cancellation reason
pub const MAX_CANCEL_REASON_LEN: usize = 256;

/// Validated order-creation payload.
#[derive(Debug, Clone)]
pub struct CreateOrderPayload {
    pub customer_id: String,
    pub payment_method_id: String,
    pub items: Vec<OrderItem>,
}

/// Raw listing query parameters, as extracted from the URL.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQueryParams {
    pub customer_id: Option<String>,
    pub status: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Validated listing filter. All clauses are optional and conjunctive.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub customer_id: Option<String>,
    pub status: Option<OrderStatus>,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl OrderFilter {
    /// Whether an order satisfies every clause of the filter.
    ///
    /// `from`/`to` compare lexicographically against the canonical
    /// `created_at` string; the canonical format is fixed-width, so for
    /// canonical inputs string order equals chronological order.
    pub fn matches(&self, order: &Order) -> bool {
        if let Some(customer_id) = &self.customer_id
            && order.customer_id != *customer_id
        {
            return false;
        }
        if let Some(status) = self.status
            && order.status != status
        {
            return false;
        }
        let created_at = canonical_timestamp(&order.created_at);
        if let Some(from) = &self.from
            && created_at.as_str() < from.as_str()
        {
            return false;
        }
        if let Some(to) = &self.to
            && created_at.as_str() > to.as_str()
        {
            return false;
        }
        true
    }
}

// ── Creation payload ────────────────────────────────────────────────

/// Validate a raw order-creation payload.
pub fn parse_create_payload(raw: &Value) -> AppResult<CreateOrderPayload> {
    check_create_payload(raw).map_err(|reason| {
        tracing::debug!(%reason, "rejected order creation payload");
        AppError::InvalidPayload
    })
}

fn check_create_payload(raw: &Value) -> Result<CreateOrderPayload, String> {
    let customer_id = require_string(raw, "customerId")?;
    let payment_method_id = require_string(raw, "paymentMethodId")?;

    let raw_items = raw
        .get("items")
        .and_then(Value::as_array)
        .ok_or("items must be an array")?;
    if raw_items.is_empty() {
        return Err("items must not be empty".into());
    }

    let mut items = Vec::with_capacity(raw_items.len());
    for (idx, item) in raw_items.iter().enumerate() {
        items.push(check_item(item).map_err(|reason| format!("items[{idx}]: {reason}"))?);
    }

    Ok(CreateOrderPayload {
        customer_id,
        payment_method_id,
        items,
    })
}

fn require_string(raw: &Value, field: &str) -> Result<String, String> {
    match raw.get(field).and_then(Value::as_str) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        Some(_) => Err(format!("{field} must not be empty")),
        None => Err(format!("{field} must be a string")),
    }
}

fn check_item(item: &Value) -> Result<OrderItem, String> {
    let sku = item
        .get("sku")
        .and_then(Value::as_str)
        .ok_or("sku must be a string")?;
    if sku.trim().is_empty() {
        return Err("sku must not be blank".into());
    }

    // as_i64 rejects floats (2.5), bools and strings outright
    let quantity = item
        .get("quantity")
        .and_then(Value::as_i64)
        .ok_or("quantity must be an integer")?;
    if quantity < 1 {
        return Err("quantity must be at least 1".into());
    }
    let quantity = u32::try_from(quantity).map_err(|_| "quantity out of range".to_string())?;

    let unit_price = item
        .get("unitPrice")
        .and_then(Value::as_f64)
        .ok_or("unitPrice must be a number")?;
    if !unit_price.is_finite() {
        return Err("unitPrice must be finite".into());
    }

    Ok(OrderItem {
        sku: sku.to_string(),
        quantity,
        unit_price,
    })
}

// ── Listing query ───────────────────────────────────────────────────

/// Validate listing query parameters.
pub fn parse_list_query(params: &ListQueryParams) -> AppResult<OrderFilter> {
    check_list_query(params).map_err(|reason| {
        tracing::debug!(%reason, "rejected order list query");
        AppError::InvalidQuery
    })
}

fn check_list_query(params: &ListQueryParams) -> Result<OrderFilter, String> {
    let status = match &params.status {
        Some(raw) => {
            Some(OrderStatus::parse(raw).ok_or_else(|| format!("unknown status '{raw}'"))?)
        }
        None => None,
    };

    for (field, value) in [("from", &params.from), ("to", &params.to)] {
        if let Some(raw) = value
            && DateTime::parse_from_rfc3339(raw).is_err()
        {
            return Err(format!("{field} is not a valid date-time: '{raw}'"));
        }
    }

    Ok(OrderFilter {
        customer_id: params.customer_id.clone(),
        status,
        from: params.from.clone(),
        to: params.to.clone(),
    })
}

// ── Cancellation ────────────────────────────────────────────────────

/// Validate an (optional) cancellation body and extract the reason.
pub fn parse_cancel_reason(body: Option<&Value>) -> AppResult<Option<String>> {
    check_cancel_reason(body).map_err(|reason| {
        tracing::debug!(%reason, "rejected cancellation request");
        AppError::InvalidCancellation
    })
}

fn check_cancel_reason(body: Option<&Value>) -> Result<Option<String>, String> {
    let Some(body) = body else {
        return Ok(None);
    };
    if body.is_null() {
        return Ok(None);
    }
    let fields = body.as_object().ok_or("body must be a JSON object")?;

    match fields.get("reason") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(reason)) if reason.len() <= MAX_CANCEL_REASON_LEN => {
            Ok(Some(reason.clone()))
        }
        Some(Value::String(reason)) => Err(format!(
            "reason is too long ({} chars, max {MAX_CANCEL_REASON_LEN})",
            reason.len()
        )),
        Some(_) => Err("reason must be a string".into()),
    }
}
