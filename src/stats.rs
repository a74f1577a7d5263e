//! 图统计
//!
//! 汇总节点、连边、度与连通性指标，可序列化后导出

use crate::graph::{Graph, GraphId};
use serde::{Deserialize, Serialize};

/// 图的统计快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub vertex_count: usize,
    pub edge_count: usize,
    /// 没有任何连边的节点数
    pub isolated_vertices: usize,
    pub self_loops: usize,
    pub max_in_degree: usize,
    pub max_out_degree: usize,
    /// 平均度（入度 + 出度）
    pub average_degree: f64,
    /// 弱连通分量数
    pub cluster_count: usize,
    /// 最大弱连通分量的节点数
    pub largest_cluster: usize,
}

impl GraphSummary {
    /// 采集统计信息
    pub fn collect<V: GraphId, E: GraphId>(graph: &Graph<V, E>) -> Self {
        let vertices = graph.vertices();

        let mut isolated_vertices = 0;
        let mut max_in_degree = 0;
        let mut max_out_degree = 0;
        for vertex in &vertices {
            let in_degree = graph.in_degree(vertex);
            let out_degree = graph.out_degree(vertex);
            if in_degree + out_degree == 0 {
                isolated_vertices += 1;
            }
            max_in_degree = max_in_degree.max(in_degree);
            max_out_degree = max_out_degree.max(out_degree);
        }

        let self_loops = vertices
            .iter()
            .filter(|vertex| graph.has_edge(vertex, vertex))
            .count();

        let average_degree = if vertices.is_empty() {
            0.0
        } else {
            (graph.edge_count() * 2) as f64 / vertices.len() as f64
        };

        let clusters = graph.cluster_by_connective();

        Self {
            vertex_count: vertices.len(),
            edge_count: graph.edge_count(),
            isolated_vertices,
            self_loops,
            max_in_degree,
            max_out_degree,
            average_degree,
            cluster_count: clusters.len(),
            largest_cluster: clusters.iter().map(Vec::len).max().unwrap_or(0),
        }
    }
}
