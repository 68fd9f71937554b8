//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`orders`] - 订单创建 / 查询 / 取消接口

pub mod health;
pub mod orders;

// Re-export common types for handlers
pub use crate::core::{AppError, AppResult};
