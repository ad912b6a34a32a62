//! 设备通信错误类型定义

/// 设备通信错误
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    /// 无法连接、认证失败或返回数据无法解析
    #[error("communication error: {0}")]
    Communication(String),

    /// 会话建立或查询超时
    #[error("timeout after {0} ms")]
    Timeout(u128),
}
