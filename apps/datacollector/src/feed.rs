//! stdin 测点流（JSON-lines）解析。
//!
//! 每行一个测点：`{"identifier":"ACTIVE_POWER_P","unit":"W","value":245,"ts_ms":1700000000000}`。

use domain::{MeasurementPoint, MeasurementType, MeasurementValue};
use serde::Deserialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// 测点行解析错误。
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("invalid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid field {0}: {1}")]
    Invalid(&'static str, String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LineValue {
    I64(i64),
    F64(f64),
}

#[derive(Debug, Deserialize)]
struct PointLine {
    identifier: String,
    unit: String,
    value: LineValue,
    ts_ms: i64,
}

/// 解析单行；空行返回 `None`。
pub fn parse_line(line: &str) -> Result<Option<MeasurementPoint>, FeedError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let parsed: PointLine = serde_json::from_str(line)?;
    if parsed.identifier.is_empty() {
        return Err(FeedError::Invalid("identifier", parsed.identifier));
    }
    let value = match parsed.value {
        LineValue::I64(v) => MeasurementValue::I64(v),
        LineValue::F64(v) => MeasurementValue::F64(v),
    };
    Ok(Some(MeasurementPoint::new(
        MeasurementType::new(parsed.identifier, parsed.unit),
        value,
        parsed.ts_ms,
    )))
}

/// 单行解析结果。
pub type ParsedLine = Result<Option<MeasurementPoint>, FeedError>;

/// 按字节读取的测点流；非 UTF-8 行作为解析错误返回，不中断读取。
pub struct PointFeed<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> PointFeed<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// 读取下一行；EOF 返回 `None`，只有底层 I/O 错误才返回 `Err`。
    pub async fn next_line(&mut self) -> std::io::Result<Option<ParsedLine>> {
        if self.reader.read_until(b'\n', &mut self.buf).await? == 0 {
            return Ok(None);
        }
        let line = std::mem::take(&mut self.buf);
        let parsed = match String::from_utf8(line) {
            Ok(text) => parse_line(&text),
            Err(err) => Err(FeedError::Utf8(err)),
        };
        Ok(Some(parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_integer_point() {
        let point = parse_line(
            r#"{"identifier":"ACTIVE_POWER_P","unit":"W","value":245,"ts_ms":1700000000000}"#,
        )
        .expect("parse")
        .expect("point");
        assert_eq!(point.identifier(), "ACTIVE_POWER_P");
        assert_eq!(point.unit(), "W");
        assert_eq!(point.value, MeasurementValue::I64(245));
        assert_eq!(point.ts_ms, 1_700_000_000_000);
    }

    #[test]
    fn parse_float_point() {
        let point = parse_line(r#"{"identifier":"VOLTAGE_L1","unit":"V","value":230.4,"ts_ms":1}"#)
            .expect("parse")
            .expect("point");
        assert_eq!(point.value, MeasurementValue::F64(230.4));
    }

    #[test]
    fn blank_line_is_skipped() {
        assert!(parse_line("   ").expect("parse").is_none());
    }

    #[test]
    fn malformed_line_is_rejected() {
        assert!(matches!(parse_line("{not json"), Err(FeedError::Json(_))));
        assert!(matches!(
            parse_line(r#"{"identifier":"","unit":"W","value":1,"ts_ms":1}"#),
            Err(FeedError::Invalid("identifier", _))
        ));
    }

    #[tokio::test]
    async fn invalid_utf8_line_is_skipped_and_reading_continues() {
        let input: &[u8] = b"{\"identifier\":\"ACTIVE_POWER_P\",\"unit\":\"W\",\"value\":1,\"ts_ms\":1}\n\
            \xff\xfe bad\n\
            {\"identifier\":\"ACTIVE_POWER_P\",\"unit\":\"W\",\"value\":2,\"ts_ms\":2}";
        let mut feed = PointFeed::new(input);

        let first = feed.next_line().await.expect("io").expect("line");
        assert_eq!(first.expect("parse").expect("point").ts_ms, 1);

        let second = feed.next_line().await.expect("io").expect("line");
        assert!(matches!(second, Err(FeedError::Utf8(_))));

        let third = feed.next_line().await.expect("io").expect("line");
        assert_eq!(third.expect("parse").expect("point").ts_ms, 2);

        assert!(feed.next_line().await.expect("io").is_none());
    }

    #[tokio::test]
    async fn blank_and_malformed_lines_do_not_end_the_feed() {
        let input: &[u8] = b"\n{not json\n";
        let mut feed = PointFeed::new(input);

        assert!(feed.next_line().await.expect("io").expect("line").expect("parse").is_none());
        assert!(matches!(
            feed.next_line().await.expect("io").expect("line"),
            Err(FeedError::Json(_))
        ));
        assert!(feed.next_line().await.expect("io").is_none());
    }
}
