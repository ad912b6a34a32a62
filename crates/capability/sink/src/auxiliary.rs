//! 智能插座读数 → 派生时序记录

use crate::error::SinkError;
use collector_device::{DeviceError, EnergyUsage};
use collector_storage::TimeSeriesRecord;

/// 光伏即时功率序列（W）。
pub const SOLAR_PANEL: &str = "SOLAR_PANEL";
/// 光伏当日累计电量序列（Wh）。
pub const SOLAR_PANEL_DAILY_ENERGY: &str = "SOLAR_PANEL_DAILY_ENERGY";

/// 毫瓦 → 瓦，向零截断。
pub fn normalize_power_w(current_power_mw: f64) -> i64 {
    (current_power_mw / 1000.0).trunc() as i64
}

/// 瓦时，向零截断，不缩放。
pub fn normalize_energy_wh(today_energy_wh: f64) -> i64 {
    today_energy_wh.trunc() as i64
}

/// 校验读数并构造两条派生记录，时间戳取自触发测点。
///
/// 任一读数缺失时整体放弃，不做部分写入或占位写入。
pub fn derive_records(
    usage: &EnergyUsage,
    ts_ms: i64,
) -> Result<[TimeSeriesRecord; 2], SinkError> {
    let (current_power, today_energy) = match (usage.current_power, usage.today_energy) {
        (Some(power), Some(energy)) => (power, energy),
        _ => {
            return Err(SinkError::DeviceDataIncomplete {
                current_power: usage.current_power,
                today_energy: usage.today_energy,
            });
        }
    };
    if !current_power.is_finite() || !today_energy.is_finite() {
        return Err(SinkError::DeviceCommunication(DeviceError::Communication(
            format!(
                "malformed readings: power={}, energy={}",
                current_power, today_energy
            ),
        )));
    }

    Ok([
        TimeSeriesRecord::new(SOLAR_PANEL, normalize_power_w(current_power), ts_ms).tag("unit", "W"),
        TimeSeriesRecord::new(
            SOLAR_PANEL_DAILY_ENERGY,
            normalize_energy_wh(today_energy),
            ts_ms,
        )
        .tag("unit", "Wh"),
    ])
}
