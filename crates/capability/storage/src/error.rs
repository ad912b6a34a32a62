//! 存储层错误类型

/// 时序写入错误
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// 连接或传输错误
    #[error("transport error: {0}")]
    Transport(String),

    /// 请求超时
    #[error("timeout after {0} ms")]
    Timeout(u128),

    /// 数据库拒绝写入（非 2xx）
    #[error("rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// 记录无法编码
    #[error("encode error: {0}")]
    Encode(String),
}
