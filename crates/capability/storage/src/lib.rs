//! # 时序存储写入模块
//!
//! 将单条时序记录写入时序数据库（InfluxDB v2），写入按目标（org + bucket）划分。
//!
//! ## 模块说明
//!
//! - [`models`]：时序记录、字段值、写入目标
//! - [`line_protocol`]：InfluxDB line protocol 编码
//! - [`traits`]：写入接口 `TimeSeriesWriter`
//! - [`influxdb`]：基于 HTTP 的 InfluxDB 写入实现（生产使用）
//! - [`in_memory`]：内存写入实现（测试与空跑）
//! - [`error`]：存储错误类型
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use collector_storage::{Destination, InfluxdbWriter, TimeSeriesRecord, TimeSeriesWriter};
//!
//! let writer = InfluxdbWriter::new("http://localhost:8086", "token", Duration::from_secs(10))?;
//! let destination = Destination::new("home", "smartmeter");
//! let record = TimeSeriesRecord::new("ACTIVE_POWER_P", 245_i64, 1_700_000_000_000).tag("unit", "W");
//! writer.write(&destination, &record).await?;
//! ```
//!
//! ## 设计约束
//!
//! - 每次调用只写一条记录，不做批量、缓冲或重试
//! - 所有网络请求都有显式超时

pub mod error;
pub mod in_memory;
pub mod influxdb;
pub mod line_protocol;
pub mod models;
pub mod traits;

pub use error::*;
pub use in_memory::InMemoryTimeSeriesWriter;
pub use influxdb::InfluxdbWriter;
pub use models::*;
pub use traits::*;
