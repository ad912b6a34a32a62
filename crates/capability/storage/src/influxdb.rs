//! InfluxDB v2 HTTP 写入实现
//!
//! `POST {url}/api/v2/write?org=..&bucket=..&precision=ms`，请求体为单行 line protocol。

use crate::error::StorageError;
use crate::line_protocol::encode_line;
use crate::models::{Destination, TimeSeriesRecord};
use crate::traits::TimeSeriesWriter;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// InfluxDB 写入客户端
///
/// 内部的 `reqwest::Client` 自带连接池，可被并发的写入调用共享。
#[derive(Clone)]
pub struct InfluxdbWriter {
    client: Client,
    url: String,
    token: String,
    timeout: Duration,
}

impl fmt::Debug for InfluxdbWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfluxdbWriter")
            .field("url", &self.url)
            .field("token", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl InfluxdbWriter {
    /// 创建写入客户端，`timeout` 作用于每个请求的全过程。
    pub fn new(
        url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, StorageError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| StorageError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            url: url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            timeout,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn map_send_error(&self, err: reqwest::Error) -> StorageError {
        if err.is_timeout() {
            StorageError::Timeout(self.timeout.as_millis())
        } else {
            StorageError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl TimeSeriesWriter for InfluxdbWriter {
    async fn write(
        &self,
        destination: &Destination,
        record: &TimeSeriesRecord,
    ) -> Result<(), StorageError> {
        let line = encode_line(record)?;
        debug!(target: "collector.storage", line = %line, bucket = %destination.bucket, "influxdb_write");

        let response = self
            .client
            .post(format!("{}/api/v2/write", self.url))
            .query(&[
                ("org", destination.org.as_str()),
                ("bucket", destination.bucket.as_str()),
                ("precision", "ms"),
            ])
            .header(AUTHORIZATION, format!("Token {}", self.token))
            .header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(line)
            .send()
            .await
            .map_err(|err| self.map_send_error(err))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let message = response.text().await.unwrap_or_default();
        Err(StorageError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    async fn ping(&self) -> Result<(), StorageError> {
        let response = self
            .client
            .get(format!("{}/ping", self.url))
            .send()
            .await
            .map_err(|err| self.map_send_error(err))?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(StorageError::Rejected {
                status: status.as_u16(),
                message: "ping failed".to_string(),
            })
        }
    }
}
