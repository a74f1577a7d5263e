//! NetGraph - 稀疏有向图
//!
//! 节点与连边均唯一、两点间同方向最多一条连边的有向图，支持：
//! - 邻接与方向查询
//! - 祖先 / 后代 / 相邻节点的分层可达遍历
//! - 依据连通性聚类
//! - CSV 边表导入与随机图生成

pub mod cli;
pub mod error;
pub mod generator;
pub mod graph;
pub mod import;
pub mod stats;

// 重导出常用类型
pub use error::{Error, Result};
pub use generator::{random_graph, RandomGraph};
pub use graph::{Graph, GraphId, GraphOptions, OrderedPair, SharedGraph, TraceDirection, Walk};
pub use import::{EdgeListImporter, ImportStats};
pub use stats::GraphSummary;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
