//! 时序写入接口

use crate::error::StorageError;
use crate::models::{Destination, TimeSeriesRecord};
use async_trait::async_trait;

/// 时序数据库写入接口
///
/// 实现需可并发调用（`Send + Sync`），由数据汇在多个写入之间共享。
#[async_trait]
pub trait TimeSeriesWriter: Send + Sync {
    /// 写入单条记录
    async fn write(
        &self,
        destination: &Destination,
        record: &TimeSeriesRecord,
    ) -> Result<(), StorageError>;

    /// 连通性检查
    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }

    /// 释放连接资源（可重复调用）
    async fn close(&self) {}
}
