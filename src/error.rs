//! 错误类型定义
//!
//! 图操作本身以返回值表达失败（bool / Option / 空集合），
//! 这里只覆盖导入与命令行等外围流程。

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("节点不存在: {0}")]
    VertexNotFound(String),

    #[error("边不存在: {0}")]
    EdgeNotFound(String),

    #[error("无效的命令: {0}")]
    InvalidCommand(String),

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("导入错误: {0}")]
    ImportError(String),

    #[error("CSV 错误: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(#[from] serde_json::Error),
}
