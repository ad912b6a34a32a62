//! # 数据汇能力模块
//!
//! 将电表测点写入时序库，并在触发测点到达时补充智能插座读数、发送心跳。
//!
//! ## 架构设计
//!
//! ```text
//! MeasurementPoint
//!       │
//!       ▼
//! DataSink::send
//!       │
//!       ├── 主写入（InfluxdbSink）
//!       │
//!       └── 触发测点 ACTIVE_POWER_P（仅 InfluxdbP110Sink）
//!             ├── 设备轮询 → 派生记录写入
//!             └── 心跳 ping
//! ```
//!
//! 每个子步骤独立隔离故障：任何失败只记录日志与指标，`send` 总是正常返回。
//! 上层如需重试须自行处理，本模块不做缓冲、补写或重试。

mod auxiliary;
mod basic;
mod enriched;
mod error;
mod healthcheck;

pub use auxiliary::{
    SOLAR_PANEL, SOLAR_PANEL_DAILY_ENERGY, derive_records, normalize_energy_wh, normalize_power_w,
};
pub use basic::{InfluxdbSink, point_record};
pub use enriched::InfluxdbP110Sink;
pub use error::SinkError;
pub use healthcheck::{HttpLivenessPinger, LivenessPinger};

use async_trait::async_trait;
use collector_config::SinkConfig;
use collector_device::AuxiliaryDevicePoller;
use collector_telemetry::MetricsSnapshot;
use domain::MeasurementPoint;
use std::sync::Arc;

/// 数据汇接口
///
/// 同一实例由单个采集任务顺序调用；实现内部不持有跨调用的可变状态（除连接句柄外）。
#[async_trait]
pub trait DataSink: Send + Sync {
    /// 数据汇类型名（用于日志）
    fn name(&self) -> &'static str;

    /// 本实例的计数指标快照
    fn metrics(&self) -> MetricsSnapshot;

    /// 预热连接；可重复调用，受写入超时约束。
    async fn start(&self);

    /// 释放连接资源；可重复调用，未 start 时也安全。
    async fn stop(&self);

    /// 写入单个测点；任何失败都在内部记录，不向调用方传播。
    async fn send(&self, point: &MeasurementPoint);
}

/// 按配置类型构造数据汇。
///
/// 扩展数据汇需要设备轮询器：未注入时在开启 `tapo` 特性的构建中使用 Tapo P110 实现，
/// 否则返回 [`SinkError::Unsupported`]。
pub fn build_sink(
    config: &SinkConfig,
    poller: Option<Arc<dyn AuxiliaryDevicePoller>>,
) -> Result<Box<dyn DataSink>, SinkError> {
    match config {
        SinkConfig::Influxdb { influxdb, timeouts } => {
            Ok(Box::new(InfluxdbSink::from_config(influxdb, *timeouts)?))
        }
        SinkConfig::InfluxdbP110 { config, timeouts } => {
            let poller = match poller {
                Some(poller) => poller,
                None => default_poller(config)?,
            };
            Ok(Box::new(InfluxdbP110Sink::from_config(
                config, *timeouts, poller,
            )?))
        }
    }
}

#[cfg(feature = "tapo")]
fn default_poller(
    config: &collector_config::InfluxdbP110Config,
) -> Result<Arc<dyn AuxiliaryDevicePoller>, SinkError> {
    let endpoint = collector_device::DeviceEndpoint::new(
        config.tapo.ip.clone(),
        config.tapo.user.clone(),
        config.tapo.password.clone(),
    );
    Ok(Arc::new(collector_device::TapoP110Poller::new(endpoint)))
}

#[cfg(not(feature = "tapo"))]
fn default_poller(
    _config: &collector_config::InfluxdbP110Config,
) -> Result<Arc<dyn AuxiliaryDevicePoller>, SinkError> {
    Err(SinkError::Unsupported(
        "influxdb_p110 sink requires a device poller (build with the `tapo` feature)".to_string(),
    ))
}
