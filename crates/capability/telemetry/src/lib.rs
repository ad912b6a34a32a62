//! 日志初始化与数据汇计数指标。

use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 数据汇指标快照。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub points_received: u64,
    pub records_written: u64,
    pub write_failure: u64,
    pub device_poll_failure: u64,
    pub device_data_incomplete: u64,
    pub liveness_ping_success: u64,
    pub liveness_ping_failure: u64,
}

/// 数据汇计数指标（每个数据汇实例各持一份）。
pub struct SinkMetrics {
    points_received: AtomicU64,
    records_written: AtomicU64,
    write_failure: AtomicU64,
    device_poll_failure: AtomicU64,
    device_data_incomplete: AtomicU64,
    liveness_ping_success: AtomicU64,
    liveness_ping_failure: AtomicU64,
}

impl SinkMetrics {
    pub fn new() -> Self {
        Self {
            points_received: AtomicU64::new(0),
            records_written: AtomicU64::new(0),
            write_failure: AtomicU64::new(0),
            device_poll_failure: AtomicU64::new(0),
            device_data_incomplete: AtomicU64::new(0),
            liveness_ping_success: AtomicU64::new(0),
            liveness_ping_failure: AtomicU64::new(0),
        }
    }

    /// 记录进入数据汇的测点数。
    pub fn record_point_received(&self) {
        self.points_received.fetch_add(1, Ordering::Relaxed);
    }

    /// 记录成功写入的时序记录数（含派生记录）。
    pub fn record_written(&self) {
        self.records_written.fetch_add(1, Ordering::Relaxed);
    }

    /// 记录写入失败次数。
    pub fn record_write_failure(&self) {
        self.write_failure.fetch_add(1, Ordering::Relaxed);
    }

    /// 记录设备通信失败次数。
    pub fn record_device_poll_failure(&self) {
        self.device_poll_failure.fetch_add(1, Ordering::Relaxed);
    }

    /// 记录设备数据不完整次数。
    pub fn record_device_data_incomplete(&self) {
        self.device_data_incomplete.fetch_add(1, Ordering::Relaxed);
    }

    /// 记录心跳成功次数。
    pub fn record_liveness_ping_success(&self) {
        self.liveness_ping_success.fetch_add(1, Ordering::Relaxed);
    }

    /// 记录心跳失败次数（非 200、传输错误、超时）。
    pub fn record_liveness_ping_failure(&self) {
        self.liveness_ping_failure.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            points_received: self.points_received.load(Ordering::Relaxed),
            records_written: self.records_written.load(Ordering::Relaxed),
            write_failure: self.write_failure.load(Ordering::Relaxed),
            device_poll_failure: self.device_poll_failure.load(Ordering::Relaxed),
            device_data_incomplete: self.device_data_incomplete.load(Ordering::Relaxed),
            liveness_ping_success: self.liveness_ping_success.load(Ordering::Relaxed),
            liveness_ping_failure: self.liveness_ping_failure.load(Ordering::Relaxed),
        }
    }
}

impl Default for SinkMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// 初始化 tracing（默认 info）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}
