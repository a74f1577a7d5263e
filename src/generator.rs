//! 随机图生成
//!
//! 节点命名为 `v0..v{n-1}`，连边命名为 `"{a}-{b}"`（a、b 为端点序号）。
//! 随机抽到已连接的节点对时该次添加失败，因此实际连边数可能少于尝试次数。

use crate::graph::{Graph, GraphOptions};
use rand::Rng;
use tracing::debug;

/// 随机图生成器
#[derive(Debug, Clone, Copy)]
pub struct RandomGraph {
    vertex_count: usize,
    edge_attempts: usize,
    options: GraphOptions,
}

impl RandomGraph {
    pub fn new(vertex_count: usize, edge_attempts: usize) -> Self {
        Self {
            vertex_count,
            edge_attempts,
            options: GraphOptions::default(),
        }
    }

    /// 设置图选项
    pub fn with_options(mut self, options: GraphOptions) -> Self {
        self.options = options;
        self
    }

    /// 生成随机图
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Graph<String, String> {
        let mut graph = Graph::with_options(self.options);
        for i in 0..self.vertex_count {
            graph.add_vertex(vertex_name(i));
        }
        if self.vertex_count == 0 {
            return graph;
        }

        let mut rejected = 0;
        for _ in 0..self.edge_attempts {
            let a = rng.gen_range(0..self.vertex_count);
            let b = rng.gen_range(0..self.vertex_count);
            if !graph.add_edge(format!("{}-{}", a, b), vertex_name(a), vertex_name(b)) {
                rejected += 1;
            }
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            rejected,
            "random graph generated"
        );
        graph
    }
}

/// 生成随机图的便捷函数
pub fn random_graph<R: Rng + ?Sized>(
    vertex_count: usize,
    edge_attempts: usize,
    rng: &mut R,
) -> Graph<String, String> {
    RandomGraph::new(vertex_count, edge_attempts).generate(rng)
}

fn vertex_name(index: usize) -> String {
    format!("v{}", index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_graph_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = random_graph(20, 40, &mut rng);

        assert_eq!(graph.vertex_count(), 20);
        assert!(graph.edge_count() <= 40);
        assert!(graph.edge_count() > 0);
        for edge in graph.edges() {
            let endpoints = graph.end_points(&edge).unwrap();
            let from: usize = endpoints.first()[1..].parse().unwrap();
            let to: usize = endpoints.second()[1..].parse().unwrap();
            assert_eq!(edge, format!("{}-{}", from, to));
        }
    }

    #[test]
    fn test_same_seed_same_graph() {
        let a = random_graph(10, 30, &mut StdRng::seed_from_u64(42));
        let b = random_graph(10, 30, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.edges(), b.edges());
    }

    #[test]
    fn test_no_vertices() {
        let graph = random_graph(0, 10, &mut StdRng::seed_from_u64(1));
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_without_self_loops() {
        let graph = RandomGraph::new(3, 50)
            .with_options(GraphOptions::new().with_self_loops(false))
            .generate(&mut StdRng::seed_from_u64(3));

        for vertex in graph.vertices() {
            assert!(!graph.has_edge(&vertex, &vertex));
        }
    }
}
