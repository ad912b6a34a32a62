//! InfluxDB line protocol 编码
//!
//! `measurement,tag=value value=<field> <ts_ms>`，标签按键排序，整数字段带 `i` 后缀。

use crate::error::StorageError;
use crate::models::{FieldValue, TimeSeriesRecord};

/// 将单条记录编码为一行 line protocol（不含换行符）。
pub fn encode_line(record: &TimeSeriesRecord) -> Result<String, StorageError> {
    if record.measurement.is_empty() {
        return Err(StorageError::Encode("empty measurement".to_string()));
    }
    let field = match record.value {
        FieldValue::I64(v) => format!("{}i", v),
        FieldValue::F64(v) if v.is_finite() => format!("{}", v),
        FieldValue::F64(v) => {
            return Err(StorageError::Encode(format!("non-finite value {}", v)));
        }
    };

    let mut line = escape(&record.measurement, &[',', ' ']);
    for (key, value) in &record.tags {
        if key.is_empty() || value.is_empty() {
            continue;
        }
        line.push(',');
        line.push_str(&escape(key, &[',', '=', ' ']));
        line.push('=');
        line.push_str(&escape(value, &[',', '=', ' ']));
    }
    line.push(' ');
    line.push_str(TimeSeriesRecord::FIELD);
    line.push('=');
    line.push_str(&field);
    line.push(' ');
    line.push_str(&record.ts_ms.to_string());
    Ok(line)
}

fn escape(raw: &str, special: &[char]) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if special.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
