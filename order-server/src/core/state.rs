use crate::analytics::AnalyticsPublisher;
use crate::client::{PaymentClient, ShippingClient};
use crate::core::Config;
use crate::orders::{OrderService, OrderStore};

/// 服务器状态 - 持有所有服务的共享引用
///
/// ServerState 是订单服务的核心数据结构。
/// 使用内部 Arc 实现浅拷贝，所有权成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | OrderStore | 内存订单表 |
/// | orders | OrderService | 订单编排服务 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 内存订单表
    pub store: OrderStore,
    /// 订单编排服务
    pub orders: OrderService,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 订单表 (内存，进程重启即丢失)
    /// 2. 下游客户端 (支付、发货，带统一超时)
    /// 3. 分析事件发布器
    /// 4. 订单编排服务
    pub fn initialize(config: &Config) -> Self {
        let store = OrderStore::new();

        let payment = PaymentClient::new(&config.payment_service_url, config.downstream_timeout());
        let shipping =
            ShippingClient::new(&config.shipping_service_url, config.downstream_timeout());
        let publisher = AnalyticsPublisher::new(
            &config.broker_url,
            &config.analytics_topic,
            config.publish_timeout(),
        );

        let orders = OrderService::new(
            store.clone(),
            payment,
            shipping,
            publisher,
            config.synthesize_missing_orders,
        );

        tracing::info!("  Payment service  : {}", config.payment_service_url);
        tracing::info!("  Shipping service : {}", config.shipping_service_url);
        tracing::info!(
            "  Analytics broker : {} (topic: {})",
            config.broker_url,
            config.analytics_topic
        );

        Self {
            config: config.clone(),
            store,
            orders,
        }
    }
}
