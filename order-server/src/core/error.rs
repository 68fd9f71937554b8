//! 统一错误处理
//!
//! 客户端输入错误统一返回 400 和固定的通用消息，不区分具体字段 —
//! 这是刻意的统一错误表面。下游调用失败和分析发布失败在本地消化，
//! 永远不会出现在这里（订单流程没有 5xx 路径）。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// 订单创建载荷不合法 (400)
    #[error("Invalid order payload")]
    InvalidPayload,

    /// 列表查询参数不合法 (400)
    #[error("Invalid query parameters")]
    InvalidQuery,

    /// 取消请求不合法 (400)
    #[error("Invalid cancellation request")]
    InvalidCancellation,

    /// 订单不存在 (404) - 仅在关闭占位订单合成时出现
    #[error("Order not found: {0}")]
    NotFound(String),

    /// 内部错误 (500) - 启动/绑定等运维路径
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidPayload => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::InvalidQuery => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::InvalidCancellation => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "Order not found".to_string()),
            AppError::Internal(err) => {
                // 记录内部错误但不暴露详细信息
                tracing::error!(error = ?err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorResponse { error: message };

        (status, Json(body)).into_response()
    }
}

/// 处理器的 Result 类型别名
pub type AppResult<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_400_with_fixed_messages() {
        let cases = [
            (AppError::InvalidPayload, "Invalid order payload"),
            (AppError::InvalidQuery, "Invalid query parameters"),
            (AppError::InvalidCancellation, "Invalid cancellation request"),
        ];
        for (err, message) in cases {
            assert_eq!(err.to_string(), message);
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::NotFound("ord-1".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
