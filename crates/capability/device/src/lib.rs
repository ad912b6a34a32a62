//! # 辅助设备采集能力模块
//!
//! 查询联网功率监测设备（如 Tapo P110 智能插座）的即时功率与当日累计电量。
//!
//! - 每次查询都新建设备会话，不复用连接
//! - 查询整体受显式超时约束，避免挂死调用方
//!
//! ```rust,ignore
//! let poller = TapoP110Poller::new(DeviceEndpoint::new("192.168.1.50", "user", "pw"));
//! let usage = poll_with_timeout(&poller, Duration::from_secs(5)).await?;
//! ```

mod error;
#[cfg(feature = "tapo")]
mod tapo_p110;
mod types;

pub use error::DeviceError;
#[cfg(feature = "tapo")]
pub use tapo_p110::TapoP110Poller;
pub use types::*;

use async_trait::async_trait;
use std::time::Duration;

/// 辅助设备轮询接口
///
/// 每次 `energy_usage` 调用由实现自行建立会话、查询并释放。
#[async_trait]
pub trait AuxiliaryDevicePoller: Send + Sync {
    /// 设备地址（用于日志）
    fn address(&self) -> &str;

    /// 查询当前用电快照
    async fn energy_usage(&self) -> Result<EnergyUsage, DeviceError>;
}

/// 在超时上限内完成一次设备查询。
pub async fn poll_with_timeout(
    poller: &dyn AuxiliaryDevicePoller,
    timeout: Duration,
) -> Result<EnergyUsage, DeviceError> {
    match tokio::time::timeout(timeout, poller.energy_usage()).await {
        Ok(result) => result,
        Err(_) => Err(DeviceError::Timeout(timeout.as_millis())),
    }
}
