//! 订单 API 端到端测试
//!
//! 通过真实的 axum Router 驱动完整编排流程。下游服务地址指向无人监听
//! 的端口：订单创建必须容忍支付/发货/分析通道全部不可达。

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use order_server::core::{Config, ServerState, build_app};

/// Config pointing every collaborator at a closed port.
fn test_config() -> Config {
    let mut config = Config::with_overrides(
        "http://127.0.0.1:9",
        "http://127.0.0.1:9",
        "127.0.0.1:9",
    );
    config.downstream_timeout_ms = 500;
    config.publish_timeout_ms = 300;
    config.synthesize_missing_orders = true;
    config
}

fn test_app() -> (Router, ServerState) {
    let state = ServerState::initialize(&test_config());
    (build_app().with_state(state.clone()), state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn valid_order_payload() -> Value {
    json!({
        "customerId": "cust-1",
        "paymentMethodId": "pm-1",
        "items": [{ "sku": "SKU-1", "quantity": 2, "unitPrice": 9.99 }]
    })
}

#[tokio::test]
async fn create_order_returns_201_despite_unreachable_downstreams() {
    let (app, state) = test_app();

    let (status, body) = send(&app, post_json("/orders", &valid_order_payload())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "PENDING_PAYMENT");
    assert_eq!(body["customerId"], "cust-1");
    let total = body["totalAmount"].as_f64().unwrap();
    assert!((total - 19.98).abs() < 1e-9);

    let id = body["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert!(body.get("cancelledAt").is_none());

    // The order really landed in the store
    assert_eq!(state.store.len(), 1);

    // And is readable back through the API
    let (status, fetched) = send(&app, get(&format!("/orders/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["status"], "PENDING_PAYMENT");
}

#[tokio::test]
async fn invalid_payloads_get_uniform_400_and_no_side_effects() {
    let (app, state) = test_app();

    let mut missing_customer = valid_order_payload();
    missing_customer.as_object_mut().unwrap().remove("customerId");

    let mut zero_quantity = valid_order_payload();
    zero_quantity["items"][0]["quantity"] = json!(0);

    let mut blank_sku = valid_order_payload();
    blank_sku["items"][0]["sku"] = json!("  ");

    let bad_payloads = [
        missing_customer,
        zero_quantity,
        blank_sku,
        json!({ "customerId": "c", "paymentMethodId": "p", "items": [] }),
    ];

    for payload in &bad_payloads {
        let (status, body) = send(&app, post_json("/orders", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid order payload");
    }

    // rejected payloads never reach the store
    assert_eq!(state.store.len(), 0);
}

#[tokio::test]
async fn non_json_body_is_rejected_like_any_invalid_payload() {
    let (app, _state) = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/orders")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("definitely not json"))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid order payload");
}

#[tokio::test]
async fn unknown_order_id_yields_placeholder_not_404() {
    let (app, _state) = test_app();

    let (status, body) = send(&app, get("/orders/no-such-order")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "no-such-order");
    assert_eq!(body["status"], "CONFIRMED");
}

#[tokio::test]
async fn cancelling_unknown_order_starts_from_placeholder() {
    let (app, _state) = test_app();

    let (status, body) = send(&app, post_json("/orders/ghost-1/cancel", &json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "ghost-1");
    assert_eq!(body["status"], "CANCELLED");
    assert!(body["cancelledAt"].is_string());
}

#[tokio::test]
async fn cancellation_is_idempotent_by_overwrite() {
    let (app, _state) = test_app();

    let (_, created) = send(&app, post_json("/orders", &valid_order_payload())).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, first) = send(
        &app,
        post_json(
            &format!("/orders/{id}/cancel"),
            &json!({ "reason": "changed my mind" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["status"], "CANCELLED");
    assert!(first["cancelledAt"].is_string());

    // second cancellation succeeds as well, no transition guard
    let (status, second) = send(
        &app,
        post_json(&format!("/orders/{id}/cancel"), &json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["status"], "CANCELLED");
    assert!(second["cancelledAt"].is_string());
}

#[tokio::test]
async fn cancel_without_body_is_accepted() {
    let (app, _state) = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/orders/ghost-2/cancel")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "CANCELLED");
}

#[tokio::test]
async fn oversized_cancel_reason_is_rejected() {
    let (app, _state) = test_app();

    let (status, body) = send(
        &app,
        post_json(
            "/orders/ghost-3/cancel",
            &json!({ "reason": "x".repeat(300) }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid cancellation request");
}

#[tokio::test]
async fn listing_applies_conjunctive_filters() {
    let (app, _state) = test_app();

    let (_, order_a) = send(&app, post_json("/orders", &valid_order_payload())).await;
    let (_, order_b) = send(
        &app,
        post_json(
            "/orders",
            &json!({
                "customerId": "cust-2",
                "paymentMethodId": "pm-2",
                "items": [{ "sku": "SKU-9", "quantity": 1, "unitPrice": 3.0 }]
            }),
        ),
    )
    .await;

    let id_b = order_b["id"].as_str().unwrap();
    send(&app, post_json(&format!("/orders/{id_b}/cancel"), &json!({}))).await;

    let (status, body) = send(&app, get("/orders?customerId=cust-1")).await;
    assert_eq!(status, StatusCode::OK);
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], order_a["id"]);

    let (status, body) = send(&app, get("/orders?status=CANCELLED")).await;
    assert_eq!(status, StatusCode::OK);
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], id_b);

    let (status, body) = send(
        &app,
        get("/orders?customerId=cust-2&status=PENDING_PAYMENT"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn listing_rejects_unknown_status_and_bad_dates() {
    let (app, _state) = test_app();

    let (status, body) = send(&app, get("/orders?status=BOGUS")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid query parameters");

    let (status, body) = send(&app, get("/orders?from=2025-01-01")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid query parameters");
}

#[tokio::test]
async fn empty_table_listing_is_seeded_with_a_placeholder() {
    let (app, state) = test_app();
    assert_eq!(state.store.len(), 0);

    let (status, body) = send(&app, get("/orders")).await;

    assert_eq!(status, StatusCode::OK);
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], "order-0000");
    assert_eq!(listed[0]["status"], "CONFIRMED");

    // the seed is synthesized on the fly, never stored
    assert_eq!(state.store.len(), 0);
}

#[tokio::test]
async fn synthesis_can_be_disabled_for_strict_lookups() {
    let mut config = test_config();
    config.synthesize_missing_orders = false;
    let state = ServerState::initialize(&config);
    let app = build_app().with_state(state);

    let (status, body) = send(&app, get("/orders/no-such-order")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Order not found");

    let (status, _) = send(&app, post_json("/orders/no-such-order/cancel", &json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, get("/orders")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);
}
