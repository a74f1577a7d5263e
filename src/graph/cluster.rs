//! 连通性聚类与子图提取

use super::graph::{Graph, GraphId};
use indexmap::IndexSet;
use tracing::debug;

impl<V: GraphId, E: GraphId> Graph<V, E> {
    /// 依据弱连通性对全部节点聚类
    ///
    /// 按节点枚举顺序依次取未访问的节点，其连通子图（含自身）为一个聚类。
    /// 孤立节点单独成类；聚类内部按遍历发现顺序排列。
    pub fn cluster_by_connective(&self) -> Vec<Vec<V>> {
        let mut clusters = Vec::new();
        let mut visited: IndexSet<V> = IndexSet::with_capacity(self.vertex_count());

        for vertex in self.vertices.keys() {
            if visited.contains(vertex) {
                continue;
            }
            let cluster = self.all_neighbours(vertex);
            visited.extend(cluster.iter().cloned());
            clusters.push(cluster);
        }

        debug!(clusters = clusters.len(), "total clusters");
        clusters
    }

    /// 指定节点及其全部后代构成的子图
    ///
    /// 包含从这些节点指出的所有连边，保留原有的节点与连边标识。
    pub fn descendant_subgraph(&self, vertex: &V) -> Graph<V, E> {
        let mut subgraph = Graph::with_options(*self.options());
        if !self.contains_vertex(vertex) {
            return subgraph;
        }
        subgraph.add_vertex(vertex.clone());

        let mut members = vec![vertex.clone()];
        members.extend(self.all_descendants(vertex));

        for from in &members {
            let Some(adjacency) = self.vertices.get(from) else {
                continue;
            };
            for (to, edge) in &adjacency.second {
                subgraph.add_edge(edge.clone(), from.clone(), to.clone());
            }
        }

        subgraph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn normalize(clusters: Vec<Vec<&'static str>>) -> HashSet<Vec<&'static str>> {
        clusters
            .into_iter()
            .map(|mut cluster| {
                cluster.sort();
                cluster
            })
            .collect()
    }

    #[test]
    fn test_two_components() {
        let mut graph = Graph::new();
        graph.add_vertex("a");
        graph.add_vertex("b");
        graph.add_vertex("c");
        graph.add_vertex("d");
        graph.add_edge("ab", "a", "b");
        graph.add_edge("cd", "c", "d");

        let clusters = graph.cluster_by_connective();
        assert_eq!(clusters.len(), 2);
        assert_eq!(
            normalize(clusters),
            [vec!["a", "b"], vec!["c", "d"]].into_iter().collect()
        );
    }

    #[test]
    fn test_singletons_and_direction() {
        let mut graph = Graph::new();
        // b 只有连入边，仍与 a、c 同类
        graph.add_edge("ab", "a", "b");
        graph.add_edge("cb", "c", "b");
        graph.add_vertex("lonely");

        let clusters = graph.cluster_by_connective();
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0], vec!["a", "b", "c"]);
        assert_eq!(clusters[1], vec!["lonely"]);
    }

    #[test]
    fn test_clusters_partition_vertices() {
        let mut graph = Graph::new();
        for (i, (from, to)) in [("a", "b"), ("b", "c"), ("d", "e"), ("f", "f"), ("c", "a")]
            .into_iter()
            .enumerate()
        {
            graph.add_edge(i, from, to);
        }
        graph.add_vertex("g");

        let clusters = graph.cluster_by_connective();
        let total: usize = clusters.iter().map(Vec::len).sum();
        assert_eq!(total, graph.vertex_count());
        assert_eq!(clusters.len(), 4);
    }

    #[test]
    fn test_empty_graph_has_no_clusters() {
        let graph: Graph<&str, &str> = Graph::new();
        assert!(graph.cluster_by_connective().is_empty());
    }

    #[test]
    fn test_descendant_subgraph() {
        let mut graph = Graph::new();
        graph.add_edge("xa", "x", "a");
        graph.add_edge("ab", "a", "b");
        graph.add_edge("bc", "b", "c");
        graph.add_edge("ca", "c", "a");
        graph.add_edge("ad", "a", "d");

        let subgraph = graph.descendant_subgraph(&"a");
        assert_eq!(subgraph.vertices(), vec!["a", "b", "d", "c"]);
        assert_eq!(subgraph.edge_count(), 4);
        assert!(!subgraph.contains_vertex(&"x"));
        assert!(!subgraph.contains_edge(&"xa"));
        assert_eq!(subgraph.find_edge(&"c", &"a"), Some(&"ca"));

        assert!(graph.descendant_subgraph(&"missing").is_empty());
    }
}
