/// 测点类型：由外部测点分类定义的稳定标识与单位。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeasurementType {
    pub identifier: String,
    pub unit: String,
}

impl MeasurementType {
    pub fn new(identifier: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            unit: unit.into(),
        }
    }

    /// 是否与给定标识精确匹配（大小写敏感）。
    pub fn is(&self, identifier: &str) -> bool {
        self.identifier == identifier
    }
}

/// 测点值的数据类型。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasurementValue {
    I64(i64),
    F64(f64),
}

impl From<i64> for MeasurementValue {
    fn from(value: i64) -> Self {
        Self::I64(value)
    }
}

impl From<f64> for MeasurementValue {
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

impl std::fmt::Display for MeasurementValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::I64(v) => write!(f, "{}", v),
            Self::F64(v) => write!(f, "{}", v),
        }
    }
}

/// 电表采集的单个测点样本。
///
/// 创建后不可变；由上游采集链路产生，交给数据汇的 `send` 消费一次。
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementPoint {
    pub measurement_type: MeasurementType,
    pub value: MeasurementValue,
    /// 采样时间（Unix 毫秒）。
    pub ts_ms: i64,
}

impl MeasurementPoint {
    pub fn new(
        measurement_type: MeasurementType,
        value: impl Into<MeasurementValue>,
        ts_ms: i64,
    ) -> Self {
        Self {
            measurement_type,
            value: value.into(),
            ts_ms,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.measurement_type.identifier
    }

    pub fn unit(&self) -> &str {
        &self.measurement_type.unit
    }
}
