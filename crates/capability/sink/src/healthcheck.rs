//! 心跳（Healthchecks 风格的存活探测）

use crate::error::SinkError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// 存活信号发送接口
#[async_trait]
pub trait LivenessPinger: Send + Sync {
    /// 发送一次心跳；仅 200 视为成功。
    async fn ping(&self) -> Result<(), SinkError>;
}

/// 基于 HTTP GET 的心跳实现，超时固定且较短。
#[derive(Debug, Clone)]
pub struct HttpLivenessPinger {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpLivenessPinger {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SinkError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| SinkError::Client(err.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl LivenessPinger for HttpLivenessPinger {
    async fn ping(&self) -> Result<(), SinkError> {
        let response = self.client.get(&self.url).send().await.map_err(|err| {
            let message = if err.is_timeout() {
                format!("timeout after {} ms", self.timeout.as_millis())
            } else {
                err.to_string()
            };
            SinkError::LivenessPing {
                status: None,
                message,
            }
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SinkError::LivenessPing {
                status: Some(status.as_u16()),
                message: format!("returned {} (should be 200 OK)", status),
            });
        }
        Ok(())
    }
}
