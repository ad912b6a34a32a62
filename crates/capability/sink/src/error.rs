//! 数据汇错误分类
//!
//! 所有错误都在 `send` 内部就地记录，不向调用方传播；分类仅用于日志与指标。

use collector_device::DeviceError;
use collector_storage::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// 时序库拒绝或无法接收记录
    #[error("write failed: {0}")]
    Write(#[from] StorageError),

    /// 设备无响应或返回数据无法解析
    #[error("device communication failed: {0}")]
    DeviceCommunication(#[from] DeviceError),

    /// 设备有响应但缺少必需读数
    #[error("some data is missing: power={current_power:?}, energy={today_energy:?}")]
    DeviceDataIncomplete {
        current_power: Option<f64>,
        today_energy: Option<f64>,
    },

    /// 心跳请求非 200、传输错误或超时
    #[error("liveness ping failed: {message}")]
    LivenessPing {
        status: Option<u16>,
        message: String,
    },

    /// 构造阶段无法建立 HTTP 客户端
    #[error("client build failed: {0}")]
    Client(String),

    /// 构造阶段无法满足的配置
    #[error("unsupported: {0}")]
    Unsupported(String),
}

impl SinkError {
    /// 稳定的分类标签（结构化日志字段）。
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Write(_) => "write_failure",
            Self::DeviceCommunication(_) => "device_communication_failure",
            Self::DeviceDataIncomplete { .. } => "device_data_incomplete",
            Self::LivenessPing { .. } => "liveness_ping_failure",
            Self::Client(_) => "client_build_failure",
            Self::Unsupported(_) => "unsupported",
        }
    }
}
