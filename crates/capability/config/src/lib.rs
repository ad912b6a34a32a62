//! 数据汇配置加载。
//!
//! 每个数据汇对应一段平铺的键值配置（如 INI 段），启动时解析一次，之后不可变。

use std::collections::HashMap;
use std::env;
use std::fmt;
use std::time::Duration;

/// 环境变量前缀：`COLLECTOR_SINK_<KEY>`。
pub const ENV_PREFIX: &str = "COLLECTOR_SINK_";

const SECTION_KEYS: &[&str] = &[
    "type",
    "url",
    "token",
    "org",
    "bucket",
    "tapo_ip",
    "tapo_user",
    "tapo_pw",
    "hc_url",
    "write_timeout_ms",
    "device_timeout_ms",
    "hc_timeout_ms",
];

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required key: {0}")]
    Missing(String),
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
    #[error("unknown sink type: {0}")]
    UnknownSinkType(String),
}

/// 数据汇类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkType {
    /// 仅写入电表测点。
    Influxdb,
    /// 写入电表测点，并在触发测点到达时采集智能插座读数、发送心跳。
    InfluxdbP110,
}

impl SinkType {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "influxdb" => Ok(Self::Influxdb),
            "influxdb_p110" => Ok(Self::InfluxdbP110),
            other => Err(ConfigError::UnknownSinkType(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Influxdb => "influxdb",
            Self::InfluxdbP110 => "influxdb_p110",
        }
    }
}

/// 写入、设备会话、心跳三类网络调用的超时上限。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkTimeouts {
    pub write: Duration,
    pub device: Duration,
    pub healthcheck: Duration,
}

impl Default for SinkTimeouts {
    fn default() -> Self {
        Self {
            write: Duration::from_secs(10),
            device: Duration::from_secs(5),
            healthcheck: Duration::from_secs(1),
        }
    }
}

/// InfluxDB 连接目标。
#[derive(Clone, PartialEq, Eq)]
pub struct InfluxdbConfig {
    pub url: String,
    pub token: String,
    pub org: String,
    pub bucket: String,
}

/// 智能插座（Tapo P110）地址与凭据。
#[derive(Clone, PartialEq, Eq)]
pub struct TapoConfig {
    pub ip: String,
    pub user: String,
    pub password: String,
}

// 令牌与密码不进入日志
impl fmt::Debug for InfluxdbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfluxdbConfig")
            .field("url", &self.url)
            .field("token", &"***")
            .field("org", &self.org)
            .field("bucket", &self.bucket)
            .finish()
    }
}

impl fmt::Debug for TapoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TapoConfig")
            .field("ip", &self.ip)
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// 扩展数据汇配置：InfluxDB + 智能插座 + 心跳地址。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfluxdbP110Config {
    pub influxdb: InfluxdbConfig,
    pub tapo: TapoConfig,
    pub hc_url: String,
}

/// 单个数据汇的完整配置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkConfig {
    Influxdb {
        influxdb: InfluxdbConfig,
        timeouts: SinkTimeouts,
    },
    InfluxdbP110 {
        config: InfluxdbP110Config,
        timeouts: SinkTimeouts,
    },
}

impl SinkConfig {
    /// 从平铺键值段解析配置（`type` 决定数据汇类型）。
    pub fn from_section(section: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let sink_type = SinkType::parse(&required(section, "type")?)?;
        let timeouts = read_timeouts(section)?;
        match sink_type {
            SinkType::Influxdb => Ok(Self::Influxdb {
                influxdb: InfluxdbConfig::from_section(section)?,
                timeouts,
            }),
            SinkType::InfluxdbP110 => Ok(Self::InfluxdbP110 {
                config: InfluxdbP110Config::from_section(section)?,
                timeouts,
            }),
        }
    }

    /// 从 `COLLECTOR_SINK_<KEY>` 环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let section = SECTION_KEYS
            .iter()
            .filter_map(|key| {
                let var = format!("{}{}", ENV_PREFIX, key.to_ascii_uppercase());
                env::var(var).ok().map(|value| (key.to_string(), value))
            })
            .collect::<HashMap<_, _>>();
        Self::from_section(&section)
    }

    pub fn sink_type(&self) -> SinkType {
        match self {
            Self::Influxdb { .. } => SinkType::Influxdb,
            Self::InfluxdbP110 { .. } => SinkType::InfluxdbP110,
        }
    }

    pub fn influxdb(&self) -> &InfluxdbConfig {
        match self {
            Self::Influxdb { influxdb, .. } => influxdb,
            Self::InfluxdbP110 { config, .. } => &config.influxdb,
        }
    }

    pub fn timeouts(&self) -> SinkTimeouts {
        match self {
            Self::Influxdb { timeouts, .. } | Self::InfluxdbP110 { timeouts, .. } => *timeouts,
        }
    }
}

impl InfluxdbConfig {
    pub fn from_section(section: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Ok(Self {
            url: required(section, "url")?,
            token: required_secret(section, "token")?,
            org: required(section, "org")?,
            bucket: required(section, "bucket")?,
        })
    }
}

impl InfluxdbP110Config {
    pub fn from_section(section: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Ok(Self {
            influxdb: InfluxdbConfig::from_section(section)?,
            tapo: TapoConfig {
                ip: required(section, "tapo_ip")?,
                user: required(section, "tapo_user")?,
                password: required_secret(section, "tapo_pw")?,
            },
            hc_url: required(section, "hc_url")?,
        })
    }
}

/// 读取必填键；缺失或为空均视为缺失。
fn required(section: &HashMap<String, String>, key: &str) -> Result<String, ConfigError> {
    match section.get(key) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ConfigError::Missing(key.to_string())),
    }
}

/// 读取凭据类必填键；原值保留，首尾空白也属于凭据本身。
fn required_secret(section: &HashMap<String, String>, key: &str) -> Result<String, ConfigError> {
    match section.get(key) {
        Some(value) if !value.trim().is_empty() => Ok(value.clone()),
        _ => Err(ConfigError::Missing(key.to_string())),
    }
}

fn read_timeouts(section: &HashMap<String, String>) -> Result<SinkTimeouts, ConfigError> {
    let defaults = SinkTimeouts::default();
    Ok(SinkTimeouts {
        write: read_duration_ms_with_default(section, "write_timeout_ms", defaults.write)?,
        device: read_duration_ms_with_default(section, "device_timeout_ms", defaults.device)?,
        healthcheck: read_duration_ms_with_default(section, "hc_timeout_ms", defaults.healthcheck)?,
    })
}

fn read_duration_ms_with_default(
    section: &HashMap<String, String>,
    key: &str,
    default: Duration,
) -> Result<Duration, ConfigError> {
    let value = match section.get(key) {
        Some(value) if !value.trim().is_empty() => value.trim(),
        _ => return Ok(default),
    };
    match value.parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(ConfigError::Invalid(key.to_string(), value.to_string())),
    }
}
