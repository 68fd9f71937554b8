use std::time::Duration;

/// 服务器配置 - 订单服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | PAYMENT_SERVICE_URL | http://localhost:3001 | 支付服务地址 |
/// | SHIPPING_SERVICE_URL | http://localhost:3002 | 发货服务地址 |
/// | BROKER_URL | localhost:9092 | 分析消息代理地址 |
/// | ANALYTICS_TOPIC | order-notifications | 分析事件主题 |
/// | DOWNSTREAM_TIMEOUT_MS | 2000 | 下游调用超时(毫秒) |
/// | PUBLISH_TIMEOUT_MS | 2000 | 分析发布硬截止时间(毫秒) |
/// | SYNTHESIZE_MISSING_ORDERS | true | 未知订单是否返回占位订单 |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 PAYMENT_SERVICE_URL=http://payments:3001 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 监听地址
    pub host: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 支付授权服务基址
    pub payment_service_url: String,
    /// 发货服务基址
    pub shipping_service_url: String,
    /// 分析消息代理地址 (Kafka bootstrap)
    pub broker_url: String,
    /// 分析事件主题
    pub analytics_topic: String,
    /// 下游调用超时时间 (毫秒)
    pub downstream_timeout_ms: u64,
    /// 分析发布硬截止时间 (毫秒)
    pub publish_timeout_ms: u64,
    /// 未知订单 ID 是否合成占位订单 (兼容源系统行为)
    pub synthesize_missing_orders: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            payment_service_url: std::env::var("PAYMENT_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:3001".into()),
            shipping_service_url: std::env::var("SHIPPING_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:3002".into()),
            broker_url: std::env::var("BROKER_URL").unwrap_or_else(|_| "localhost:9092".into()),
            analytics_topic: std::env::var("ANALYTICS_TOPIC")
                .unwrap_or_else(|_| "order-notifications".into()),
            downstream_timeout_ms: std::env::var("DOWNSTREAM_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(2000),
            publish_timeout_ms: std::env::var("PUBLISH_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(2000),
            synthesize_missing_orders: std::env::var("SYNTHESIZE_MISSING_ORDERS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(
        payment_service_url: impl Into<String>,
        shipping_service_url: impl Into<String>,
        broker_url: impl Into<String>,
    ) -> Self {
        let mut config = Self::from_env();
        config.payment_service_url = payment_service_url.into();
        config.shipping_service_url = shipping_service_url.into();
        config.broker_url = broker_url.into();
        config
    }

    /// 下游调用超时
    pub fn downstream_timeout(&self) -> Duration {
        Duration::from_millis(self.downstream_timeout_ms)
    }

    /// 分析发布硬截止时间
    pub fn publish_timeout(&self) -> Duration {
        Duration::from_millis(self.publish_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
