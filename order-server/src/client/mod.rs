//! 下游服务客户端 - 尽力通知 (best-effort)
//!
//! 支付授权与发货创建都是顾问式调用：每次恰好尝试一次，
//! 失败(网络错误/非 2xx/响应解析失败)只记录日志并返回 `None`，
//! 绝不向订单创建方传播。无重试，无熔断。

pub mod payment;
pub mod shipping;

pub use payment::{PaymentAuthorization, PaymentClient};
pub use shipping::{Shipment, ShippingClient};
