//! 时序写入内存实现

use crate::error::StorageError;
use crate::models::{Destination, TimeSeriesRecord};
use crate::traits::TimeSeriesWriter;
use std::sync::RwLock;

/// 时序写入内存存储
#[derive(Default)]
pub struct InMemoryTimeSeriesWriter {
    records: RwLock<Vec<(Destination, TimeSeriesRecord)>>,
}

impl InMemoryTimeSeriesWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已写入的记录数（用于测试）
    pub fn len(&self) -> usize {
        self.records.read().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 按写入顺序返回全部记录
    pub fn records(&self) -> Vec<(Destination, TimeSeriesRecord)> {
        self.records.read().map(|v| v.clone()).unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl TimeSeriesWriter for InMemoryTimeSeriesWriter {
    async fn write(
        &self,
        destination: &Destination,
        record: &TimeSeriesRecord,
    ) -> Result<(), StorageError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StorageError::Transport("lock failed".to_string()))?;
        records.push((destination.clone(), record.clone()));
        Ok(())
    }
}
