//! Order Server - 订单接入服务
//!
//! # 架构概述
//!
//! 本模块是订单服务的主入口，提供以下核心功能：
//!
//! - **HTTP API** (`api`): 订单创建 / 查询 / 取消接口
//! - **订单编排** (`orders`): 校验、构建、存储与编排
//! - **下游调用** (`client`): 支付授权与发货创建的尽力通知
//! - **分析事件** (`analytics`): 带硬截止时间的异步事件发布
//!
//! # 模块结构
//!
//! ```text
//! order-server/src/
//! ├── core/          # 配置、状态、错误、HTTP 服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── orders/        # 订单域：校验、构建、存储、编排
//! ├── client/        # 下游服务 HTTP 客户端
//! ├── analytics/     # 分析事件发布器
//! └── utils/         # 日志等工具
//! ```

pub mod analytics;
pub mod api;
pub mod client;
pub mod core;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use analytics::{AnalyticsPublisher, PublishOutcome};
pub use core::{AppError, AppResult, Config, Server, ServerState};
pub use orders::{OrderService, OrderStore};

// Re-export logger functions
pub use utils::logger::init_logger;
