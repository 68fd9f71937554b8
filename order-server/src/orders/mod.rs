//! 订单域 - 校验、构建、存储与编排
//!
//! # 模块结构
//!
//! - [`validate`] - 原始请求校验（统一错误表面）
//! - [`builder`] - 订单聚合构建（纯函数）
//! - [`store`] - 内存订单表
//! - [`service`] - 编排服务：create / get / list / cancel

pub mod builder;
pub mod service;
pub mod store;
pub mod validate;

pub use service::OrderService;
pub use store::OrderStore;
pub use validate::{CreateOrderPayload, ListQueryParams, OrderFilter};
