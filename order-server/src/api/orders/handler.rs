//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    extract::rejection::JsonRejection,
    http::StatusCode,
};
use serde_json::Value;

use crate::core::{AppError, AppResult, ServerState};
use crate::orders::ListQueryParams;
use shared::models::Order;

/// Create an order
///
/// A body that is not even JSON gets the same generic rejection as a
/// structurally invalid one (uniform error surface).
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let Json(raw) = payload.map_err(|_| AppError::InvalidPayload)?;
    let order = state.orders.create(&raw).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// List orders (filtered)
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ListQueryParams>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = state.orders.list(&params)?;
    Ok(Json(orders))
}

/// Get order by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = state.orders.get(&id)?;
    Ok(Json(order))
}

/// Cancel an order
///
/// The body is optional: a request without one is a plain cancellation,
/// a request with one may carry a `reason`.
pub async fn cancel(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Order>> {
    let raw = match body {
        Ok(Json(value)) => Some(value),
        // no content-type / no body → cancel without a reason
        Err(JsonRejection::MissingJsonContentType(_)) => None,
        // a body that claims to be JSON but is unreadable
        Err(_) => return Err(AppError::InvalidCancellation),
    };

    let order = state.orders.cancel(&id, raw.as_ref()).await?;
    Ok(Json(order))
}
