//! 分析事件发布 - 带硬截止时间的 fire-and-forget 通道
//!
//! 订单生命周期事件通过短生命周期的 Kafka 连接发布到固定主题。
//! 发布永远不阻塞订单响应路径，失败只进入日志。

pub mod publisher;

pub use publisher::{AnalyticsPublisher, PublishOutcome};
