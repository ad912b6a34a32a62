//! 扩展数据汇：主写入 + 智能插座读数 + 心跳

use crate::DataSink;
use crate::auxiliary::derive_records;
use crate::basic::InfluxdbSink;
use crate::error::SinkError;
use crate::healthcheck::{HttpLivenessPinger, LivenessPinger};
use async_trait::async_trait;
use collector_config::{InfluxdbP110Config, SinkTimeouts};
use collector_device::{AuxiliaryDevicePoller, poll_with_timeout};
use collector_telemetry::MetricsSnapshot;
use domain::{ACTIVE_POWER_P, MeasurementPoint};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

const NAME: &str = "influxdb_p110";

/// 扩展数据汇
///
/// 主写入行为与 [`InfluxdbSink`] 一致；触发测点到达后并发执行设备轮询与心跳，
/// 二者都在 `send` 返回前结束，且彼此、与主写入之间故障隔离。
pub struct InfluxdbP110Sink {
    base: InfluxdbSink,
    poller: Arc<dyn AuxiliaryDevicePoller>,
    pinger: Arc<dyn LivenessPinger>,
    device_timeout: Duration,
}

impl InfluxdbP110Sink {
    pub fn new(
        base: InfluxdbSink,
        poller: Arc<dyn AuxiliaryDevicePoller>,
        pinger: Arc<dyn LivenessPinger>,
        device_timeout: Duration,
    ) -> Self {
        Self {
            base,
            poller,
            pinger,
            device_timeout,
        }
    }

    pub fn from_config(
        config: &InfluxdbP110Config,
        timeouts: SinkTimeouts,
        poller: Arc<dyn AuxiliaryDevicePoller>,
    ) -> Result<Self, SinkError> {
        let base = InfluxdbSink::from_config(&config.influxdb, timeouts)?;
        let pinger = HttpLivenessPinger::new(config.hc_url.clone(), timeouts.healthcheck)?;
        Ok(Self::new(base, poller, Arc::new(pinger), timeouts.device))
    }

    /// 轮询设备并写入两条派生记录。
    async fn send_device_data(&self, ts_ms: i64) {
        let usage = match poll_with_timeout(self.poller.as_ref(), self.device_timeout).await {
            Ok(usage) => usage,
            Err(err) => {
                self.base.sink_metrics().record_device_poll_failure();
                let err = SinkError::from(err);
                error!(
                    target: "collector.sink",
                    sink = NAME,
                    address = %self.poller.address(),
                    kind = err.kind(),
                    error = %err,
                    "device_poll_failed"
                );
                return;
            }
        };

        let records = match derive_records(&usage, ts_ms) {
            Ok(records) => records,
            Err(err) => {
                let metrics = self.base.sink_metrics();
                match err {
                    SinkError::DeviceDataIncomplete { .. } => metrics.record_device_data_incomplete(),
                    _ => metrics.record_device_poll_failure(),
                }
                error!(
                    target: "collector.sink",
                    sink = NAME,
                    address = %self.poller.address(),
                    current_power = ?usage.current_power,
                    today_energy = ?usage.today_energy,
                    kind = err.kind(),
                    error = %err,
                    "device_data_rejected"
                );
                return;
            }
        };

        for record in &records {
            if let Err(err) = self.base.write_record(record).await {
                self.base.sink_metrics().record_write_failure();
                error!(
                    target: "collector.sink",
                    sink = NAME,
                    measurement = %record.measurement,
                    kind = err.kind(),
                    error = %err,
                    "device_data_write_failed"
                );
            }
        }
    }

    async fn send_liveness_ping(&self) {
        match self.pinger.ping().await {
            Ok(()) => {
                self.base.sink_metrics().record_liveness_ping_success();
                debug!(target: "collector.sink", sink = NAME, "liveness_ping_sent");
            }
            Err(err) => {
                self.base.sink_metrics().record_liveness_ping_failure();
                let status = match &err {
                    SinkError::LivenessPing { status, .. } => *status,
                    _ => None,
                };
                error!(
                    target: "collector.sink",
                    sink = NAME,
                    status = ?status,
                    kind = err.kind(),
                    error = %err,
                    "liveness_ping_failed"
                );
            }
        }
    }
}

#[async_trait]
impl DataSink for InfluxdbP110Sink {
    fn name(&self) -> &'static str {
        NAME
    }

    fn metrics(&self) -> MetricsSnapshot {
        self.base.sink_metrics().snapshot()
    }

    async fn start(&self) {
        self.base.start_writer(NAME).await;
    }

    async fn stop(&self) {
        self.base.stop_writer(NAME).await;
    }

    async fn send(&self, point: &MeasurementPoint) {
        self.base.write_point(NAME, point).await;

        if !point.measurement_type.is(ACTIVE_POWER_P) {
            return;
        }
        tokio::join!(
            self.send_device_data(point.ts_ms),
            self.send_liveness_ping()
        );
    }
}
