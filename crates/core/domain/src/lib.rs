pub mod data;

pub use data::{MeasurementPoint, MeasurementType, MeasurementValue};

/// 触发扩展采集与心跳的测点标识（瞬时有功功率）。
///
/// 匹配规则为精确、大小写敏感的字符串比较。
pub const ACTIVE_POWER_P: &str = "ACTIVE_POWER_P";
