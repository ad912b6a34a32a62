//! 内存存储实现
//!
//! 仅用于本地测试和空跑。

mod writer;

pub use writer::InMemoryTimeSeriesWriter;
