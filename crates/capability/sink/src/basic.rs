//! 基础数据汇：测点直写 InfluxDB

use crate::DataSink;
use crate::error::SinkError;
use async_trait::async_trait;
use collector_config::{InfluxdbConfig, SinkTimeouts};
use collector_storage::{Destination, FieldValue, InfluxdbWriter, TimeSeriesRecord, TimeSeriesWriter};
use collector_telemetry::{MetricsSnapshot, SinkMetrics};
use domain::{MeasurementPoint, MeasurementValue};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error, info, warn};

/// 测点 → 时序记录：标识取测点类型，`unit` 标签取单位，值与时间戳原样复制。
pub fn point_record(point: &MeasurementPoint) -> TimeSeriesRecord {
    let value = match point.value {
        MeasurementValue::I64(v) => FieldValue::I64(v),
        MeasurementValue::F64(v) => FieldValue::F64(v),
    };
    TimeSeriesRecord::new(point.identifier(), value, point.ts_ms).tag("unit", point.unit())
}

/// 基础数据汇
pub struct InfluxdbSink {
    writer: Arc<dyn TimeSeriesWriter>,
    destination: Destination,
    metrics: Arc<SinkMetrics>,
    started: AtomicBool,
    stopped: AtomicBool,
}

impl InfluxdbSink {
    pub fn new(writer: Arc<dyn TimeSeriesWriter>, destination: Destination) -> Self {
        Self {
            writer,
            destination,
            metrics: Arc::new(SinkMetrics::new()),
            started: AtomicBool::new(false),
            stopped: AtomicBool::new(false),
        }
    }

    /// 按配置建立 InfluxDB 写入客户端。
    pub fn from_config(config: &InfluxdbConfig, timeouts: SinkTimeouts) -> Result<Self, SinkError> {
        let writer = InfluxdbWriter::new(config.url.clone(), config.token.clone(), timeouts.write)
            .map_err(|err| SinkError::Client(err.to_string()))?;
        Ok(Self::new(
            Arc::new(writer),
            Destination::new(config.org.clone(), config.bucket.clone()),
        ))
    }

    /// 共享外部指标实例（如多个数据汇汇总到同一份计数）。
    pub fn with_metrics(mut self, metrics: Arc<SinkMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    pub(crate) fn sink_metrics(&self) -> &SinkMetrics {
        &self.metrics
    }

    /// 写入单条记录并计数。
    pub(crate) async fn write_record(&self, record: &TimeSeriesRecord) -> Result<(), SinkError> {
        self.writer.write(&self.destination, record).await?;
        self.metrics.record_written();
        Ok(())
    }

    /// 主写入路径：构造并写入测点记录，失败只记录日志。
    pub(crate) async fn write_point(&self, sink: &'static str, point: &MeasurementPoint) {
        self.metrics.record_point_received();
        let record = point_record(point);
        match self.write_record(&record).await {
            Ok(()) => debug!(
                target: "collector.sink",
                sink,
                measurement = %point.identifier(),
                ts_ms = point.ts_ms,
                "smartmeter_data_written"
            ),
            Err(err) => {
                self.metrics.record_write_failure();
                error!(
                    target: "collector.sink",
                    sink,
                    measurement = %point.identifier(),
                    kind = err.kind(),
                    error = %err,
                    "smartmeter_data_write_failed"
                );
            }
        }
    }

    pub(crate) async fn start_writer(&self, sink: &'static str) {
        if self.started.swap(true, Ordering::SeqCst) {
            return;
        }
        match self.writer.ping().await {
            Ok(()) => info!(target: "collector.sink", sink, bucket = %self.destination.bucket, "sink_started"),
            Err(err) => warn!(
                target: "collector.sink",
                sink,
                bucket = %self.destination.bucket,
                error = %err,
                "sink_started_store_unreachable"
            ),
        }
    }

    pub(crate) async fn stop_writer(&self, sink: &'static str) {
        if self.stopped.swap(true, Ordering::SeqCst) {
            return;
        }
        self.writer.close().await;
        info!(target: "collector.sink", sink, "sink_stopped");
    }
}

#[async_trait]
impl DataSink for InfluxdbSink {
    fn name(&self) -> &'static str {
        "influxdb"
    }

    fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    async fn start(&self) {
        self.start_writer(self.name()).await;
    }

    async fn stop(&self) {
        self.stop_writer(self.name()).await;
    }

    async fn send(&self, point: &MeasurementPoint) {
        self.write_point(self.name(), point).await;
    }
}
