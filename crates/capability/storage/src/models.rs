//! 时序记录数据模型

use std::collections::BTreeMap;

/// 写入目标（org + bucket）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub org: String,
    pub bucket: String,
}

impl Destination {
    pub fn new(org: impl Into<String>, bucket: impl Into<String>) -> Self {
        Self {
            org: org.into(),
            bucket: bucket.into(),
        }
    }
}

/// 单字段的字段值。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    I64(i64),
    F64(f64),
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::I64(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

/// 时序记录：标识、标签、单个 `value` 字段、时间戳。
///
/// 每次写入时新建，写入调用结束后不再保留。
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesRecord {
    pub measurement: String,
    pub tags: BTreeMap<String, String>,
    pub value: FieldValue,
    /// Unix 毫秒
    pub ts_ms: i64,
}

impl TimeSeriesRecord {
    /// 字段名固定为 `value`。
    pub const FIELD: &'static str = "value";

    pub fn new(measurement: impl Into<String>, value: impl Into<FieldValue>, ts_ms: i64) -> Self {
        Self {
            measurement: measurement.into(),
            tags: BTreeMap::new(),
            value: value.into(),
            ts_ms,
        }
    }

    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }
}
