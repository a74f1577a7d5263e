//! 图核心模块
//!
//! 稀疏有向图以及其上的遍历、聚类

mod cluster;
mod graph;
mod options;
mod pair;
mod shared;
mod traversal;

pub use graph::{Graph, GraphId};
pub use options::GraphOptions;
pub use pair::OrderedPair;
pub use shared::SharedGraph;
pub use traversal::{TraceDirection, Walk};
