//! 稀疏有向图
//!
//! 节点与连边均不可重复，从起始节点到结束节点最多仅能有一条连边。
//! 整体结构为 `Map<V, Pair<Map<V, E>, Map<V, E>>>` 加上 `Map<E, Pair<V, V>>`。

use super::options::GraphOptions;
use super::pair::OrderedPair;
use indexmap::{IndexMap, IndexSet};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

/// 可作为节点或连边标识的类型
pub trait GraphId: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> GraphId for T {}

/// 节点连接信息：（连入表, 连出表），键为相邻节点，值为连边
pub(crate) type Adjacency<V, E> = OrderedPair<IndexMap<V, E>, IndexMap<V, E>>;

/// 有向图
#[derive(Debug, Clone)]
pub struct Graph<V, E> {
    /// 节点到连接信息的映射
    pub(super) vertices: IndexMap<V, Adjacency<V, E>>,
    /// 连边到端点（起始节点, 结束节点）的映射
    pub(super) edges: IndexMap<E, OrderedPair<V, V>>,
    options: GraphOptions,
}

impl<V: GraphId, E: GraphId> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: GraphId, E: GraphId> Graph<V, E> {
    /// 创建空图
    pub fn new() -> Self {
        Self::with_options(GraphOptions::default())
    }

    /// 按指定选项创建空图
    pub fn with_options(options: GraphOptions) -> Self {
        Self {
            vertices: IndexMap::new(),
            edges: IndexMap::new(),
            options,
        }
    }

    /// 预分配节点与连边容量
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: IndexMap::with_capacity(vertices),
            edges: IndexMap::with_capacity(edges),
            options: GraphOptions::default(),
        }
    }

    pub fn options(&self) -> &GraphOptions {
        &self.options
    }

    // ==================== 节点与连边集合 ====================

    /// 获取节点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 获取连边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 列出所有节点（插入顺序）
    pub fn vertices(&self) -> Vec<V> {
        self.vertices.keys().cloned().collect()
    }

    /// 列出所有连边（插入顺序）
    pub fn edges(&self) -> Vec<E> {
        self.edges.keys().cloned().collect()
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains_key(vertex)
    }

    pub fn contains_edge(&self, edge: &E) -> bool {
        self.edges.contains_key(edge)
    }

    // ==================== 插入与删除 ====================

    /// 添加节点，若节点已存在则返回 false
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.contains_vertex(&vertex) {
            return false;
        }
        self.vertices
            .insert(vertex, OrderedPair::new(IndexMap::new(), IndexMap::new()));
        true
    }

    /// 添加连边
    ///
    /// 端点不存在时先自动创建。以下情况返回 false 且不修改连边：
    /// 已存在从 `from` 指向 `to` 的连边（无论其标识）、连边标识已被占用、
    /// 选项禁止自环而 `from == to`。
    pub fn add_edge(&mut self, edge: E, from: V, to: V) -> bool {
        if !self.options.allow_self_loops && from == to {
            debug!(?edge, vertex = ?from, "self-loop rejected");
            return false;
        }
        if self.contains_edge(&edge) {
            debug!(?edge, "edge id already in use");
            return false;
        }

        for endpoint in [&from, &to] {
            if self.add_vertex(endpoint.clone()) {
                debug!(vertex = ?endpoint, "add vertex");
            }
        }

        if self.has_edge(&from, &to) {
            debug!(?edge, ?from, ?to, "vertices already connected");
            return false;
        }

        if let Some(adjacency) = self.vertices.get_mut(&from) {
            adjacency.second.insert(to.clone(), edge.clone());
        }
        if let Some(adjacency) = self.vertices.get_mut(&to) {
            adjacency.first.insert(from.clone(), edge.clone());
        }
        self.edges.insert(edge, OrderedPair::new(from, to));

        true
    }

    /// 删除连边，端点保留
    pub fn remove_edge(&mut self, edge: &E) -> bool {
        let Some(endpoints) = self.edges.shift_remove(edge) else {
            return false;
        };

        let (from, to) = endpoints.into_inner();
        if let Some(adjacency) = self.vertices.get_mut(&from) {
            adjacency.second.shift_remove(&to);
        }
        if let Some(adjacency) = self.vertices.get_mut(&to) {
            adjacency.first.shift_remove(&from);
        }

        true
    }

    /// 删除节点及其所有连边
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        if !self.contains_vertex(vertex) {
            return false;
        }

        let incident = self.connected_edges(vertex);
        if !incident.is_empty() {
            debug!(?vertex, edges = incident.len(), "removing incident edges");
        }
        for edge in &incident {
            self.remove_edge(edge);
        }
        self.vertices.shift_remove(vertex);

        true
    }

    /// 删除连边以及它的两个端点
    pub fn remove_edge_with_end_points(&mut self, edge: &E) -> bool {
        let Some((from, to)) = self
            .edges
            .get(edge)
            .map(|pair| (pair.first.clone(), pair.second.clone()))
        else {
            return false;
        };

        self.remove_edge(edge);
        self.remove_vertex(&from);
        self.remove_vertex(&to);

        true
    }

    // ==================== 连边查询 ====================

    /// 查找从 `from` 指向 `to` 的连边
    pub fn find_edge(&self, from: &V, to: &V) -> Option<&E> {
        if !self.contains_vertex(to) {
            return None;
        }
        self.vertices.get(from)?.second.get(to)
    }

    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.find_edge(from, to).is_some()
    }

    /// 查找两个节点之间的连边，`directed` 为 false 时包含反向连边
    pub fn find_edge_set(&self, from: &V, to: &V, directed: bool) -> Vec<E> {
        let mut edge_set = Vec::new();

        if let Some(edge) = self.find_edge(from, to) {
            edge_set.push(edge.clone());
        }
        // 自环只记一次
        if !directed && from != to {
            if let Some(edge) = self.find_edge(to, from) {
                edge_set.push(edge.clone());
            }
        }

        edge_set
    }

    // ==================== 度与相邻节点 ====================

    /// 度（入度 + 出度），自环计两次
    pub fn degree(&self, vertex: &V) -> usize {
        self.vertices
            .get(vertex)
            .map_or(0, |adjacency| adjacency.first.len() + adjacency.second.len())
    }

    pub fn in_degree(&self, vertex: &V) -> usize {
        self.vertices
            .get(vertex)
            .map_or(0, |adjacency| adjacency.first.len())
    }

    pub fn out_degree(&self, vertex: &V) -> usize {
        self.vertices
            .get(vertex)
            .map_or(0, |adjacency| adjacency.second.len())
    }

    /// 直接祖先（连入节点）
    pub fn ancestors(&self, vertex: &V) -> Vec<V> {
        self.vertices
            .get(vertex)
            .map(|adjacency| adjacency.first.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// 直接后代（连出节点）
    pub fn descendants(&self, vertex: &V) -> Vec<V> {
        self.vertices
            .get(vertex)
            .map(|adjacency| adjacency.second.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// 相邻节点：祖先与后代的并集，先祖先后后代，去重
    pub fn neighbours(&self, vertex: &V) -> Vec<V> {
        let Some(adjacency) = self.vertices.get(vertex) else {
            return Vec::new();
        };

        let set: IndexSet<V> = adjacency
            .first
            .keys()
            .chain(adjacency.second.keys())
            .cloned()
            .collect();
        set.into_iter().collect()
    }

    // ==================== 节点的连边 ====================

    /// 连入与连出的所有连边（先连入后连出）
    pub fn connected_edges(&self, vertex: &V) -> Vec<E> {
        let mut edges = self.in_edges(vertex);
        edges.extend(self.out_edges(vertex));
        edges
    }

    /// 指向节点的连边
    pub fn in_edges(&self, vertex: &V) -> Vec<E> {
        self.vertices
            .get(vertex)
            .map(|adjacency| adjacency.first.values().cloned().collect())
            .unwrap_or_default()
    }

    /// 从节点指出的连边
    pub fn out_edges(&self, vertex: &V) -> Vec<E> {
        self.vertices
            .get(vertex)
            .map(|adjacency| adjacency.second.values().cloned().collect())
            .unwrap_or_default()
    }

    // ==================== 连边端点 ====================

    /// 连边的端点（起始节点, 结束节点）
    pub fn end_points(&self, edge: &E) -> Option<&OrderedPair<V, V>> {
        self.edges.get(edge)
    }

    pub fn from_point(&self, edge: &E) -> Option<&V> {
        self.edges.get(edge).map(OrderedPair::first)
    }

    pub fn to_point(&self, edge: &E) -> Option<&V> {
        self.edges.get(edge).map(OrderedPair::second)
    }

    /// 汇入指定连边的连边（起始节点的连入边）
    pub fn source_edges(&self, edge: &E) -> Option<Vec<E>> {
        self.from_point(edge).map(|from| self.in_edges(from))
    }

    /// 由指定连边流出的连边（结束节点的连出边）
    pub fn destination_edges(&self, edge: &E) -> Option<Vec<E>> {
        self.to_point(edge).map(|to| self.out_edges(to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph<&'static str, &'static str> {
        // a -> b -> c, a -> d
        let mut graph = Graph::new();
        graph.add_edge("ab", "a", "b");
        graph.add_edge("bc", "b", "c");
        graph.add_edge("ad", "a", "d");
        graph
    }

    #[test]
    fn test_add_vertex() {
        let mut graph: Graph<&str, &str> = Graph::new();
        assert!(graph.add_vertex("a"));
        assert!(graph.contains_vertex(&"a"));
        assert!(!graph.add_vertex("a"));
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.degree(&"a"), 0);
    }

    #[test]
    fn test_add_edge_creates_vertices() {
        let mut graph = Graph::new();
        assert!(graph.add_edge("e", "a", "b"));

        assert!(graph.contains_edge(&"e"));
        assert!(graph.contains_vertex(&"a"));
        assert!(graph.contains_vertex(&"b"));
        assert_eq!(graph.find_edge(&"a", &"b"), Some(&"e"));
        assert_eq!(graph.from_point(&"e"), Some(&"a"));
        assert_eq!(graph.to_point(&"e"), Some(&"b"));
        assert_eq!(graph.vertices(), vec!["a", "b"]);
    }

    #[test]
    fn test_duplicate_pair_rejected() {
        let mut graph = Graph::new();
        assert!(graph.add_edge("e1", "a", "b"));
        assert!(!graph.add_edge("e2", "a", "b"));

        assert_eq!(graph.edges(), vec!["e1"]);
        assert!(!graph.contains_edge(&"e2"));
        assert_eq!(graph.out_degree(&"a"), 1);

        // 反方向是另一对节点
        assert!(graph.add_edge("e2", "b", "a"));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_reused_edge_id_rejected() {
        let mut graph = Graph::new();
        assert!(graph.add_edge("e", "a", "b"));
        assert!(!graph.add_edge("e", "c", "d"));

        assert_eq!(graph.end_points(&"e"), Some(&OrderedPair::new("a", "b")));
        assert!(!graph.contains_vertex(&"c"));
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn test_remove_edge_keeps_vertices() {
        let mut graph = Graph::new();
        graph.add_edge("e", "a", "b");

        assert!(graph.remove_edge(&"e"));
        assert!(!graph.contains_edge(&"e"));
        assert!(!graph.has_edge(&"a", &"b"));
        assert!(graph.contains_vertex(&"a"));
        assert!(graph.contains_vertex(&"b"));
        assert_eq!(graph.degree(&"a"), 0);
        assert_eq!(graph.degree(&"b"), 0);

        assert!(!graph.remove_edge(&"e"));
    }

    #[test]
    fn test_remove_vertex_cascades() {
        let mut graph = Graph::new();
        graph.add_vertex("a");
        graph.add_vertex("b");
        graph.add_edge("e", "a", "b");

        assert!(graph.remove_vertex(&"a"));
        assert!(!graph.contains_vertex(&"a"));
        assert!(!graph.contains_edge(&"e"));
        assert_eq!(graph.in_degree(&"b"), 0);

        assert!(!graph.remove_vertex(&"a"));
    }

    #[test]
    fn test_remove_edge_with_end_points() {
        let mut graph = sample();

        assert!(graph.remove_edge_with_end_points(&"ab"));
        // a 与 b 被删除，连带 ad 与 bc
        assert_eq!(graph.vertices(), vec!["c", "d"]);
        assert_eq!(graph.edge_count(), 0);

        assert!(!graph.remove_edge_with_end_points(&"ab"));
    }

    #[test]
    fn test_in_out_symmetry() {
        let graph = sample();

        assert_eq!(graph.out_edges(&"a"), vec!["ab", "ad"]);
        assert_eq!(graph.in_edges(&"b"), vec!["ab"]);
        assert!(graph.in_edges(&"a").is_empty());
        assert!(!graph.out_edges(&"b").contains(&"ab"));
        assert_eq!(graph.connected_edges(&"b"), vec!["ab", "bc"]);
    }

    #[test]
    fn test_self_loop() {
        let mut graph = Graph::new();
        assert!(graph.add_edge("loop", "a", "a"));

        assert_eq!(graph.degree(&"a"), 2);
        assert_eq!(graph.in_degree(&"a"), 1);
        assert_eq!(graph.out_degree(&"a"), 1);
        assert_eq!(graph.connected_edges(&"a"), vec!["loop", "loop"]);
        assert_eq!(graph.neighbours(&"a"), vec!["a"]);
        assert_eq!(graph.find_edge_set(&"a", &"a", false), vec!["loop"]);

        assert!(graph.remove_vertex(&"a"));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_self_loop_disabled() {
        let mut graph: Graph<&str, &str> =
            Graph::with_options(GraphOptions::new().with_self_loops(false));
        assert!(!graph.add_edge("loop", "a", "a"));
        assert!(!graph.contains_vertex(&"a"));
        assert!(graph.add_edge("ab", "a", "b"));
    }

    #[test]
    fn test_find_edge_set() {
        let mut graph = Graph::new();
        graph.add_edge("ab", "a", "b");
        graph.add_edge("ba", "b", "a");
        graph.add_vertex("c");

        assert_eq!(graph.find_edge_set(&"a", &"b", true), vec!["ab"]);
        assert_eq!(graph.find_edge_set(&"a", &"b", false), vec!["ab", "ba"]);
        assert!(graph.find_edge_set(&"a", &"c", false).is_empty());
        assert!(graph.find_edge_set(&"a", &"x", false).is_empty());
        assert_eq!(graph.find_edge(&"x", &"a"), None);
    }

    #[test]
    fn test_neighbours_deduplicated() {
        let mut graph = Graph::new();
        graph.add_edge("ab", "a", "b");
        graph.add_edge("ba", "b", "a");
        graph.add_edge("ca", "c", "a");

        assert_eq!(graph.ancestors(&"a"), vec!["b", "c"]);
        assert_eq!(graph.descendants(&"a"), vec!["b"]);
        assert_eq!(graph.neighbours(&"a"), vec!["b", "c"]);
        assert!(graph.neighbours(&"x").is_empty());
    }

    #[test]
    fn test_source_and_destination_edges() {
        let graph = sample();

        assert_eq!(graph.source_edges(&"bc"), Some(vec!["ab"]));
        assert_eq!(graph.destination_edges(&"ab"), Some(vec!["bc"]));
        assert_eq!(graph.source_edges(&"ab"), Some(vec![]));
        assert_eq!(graph.source_edges(&"zz"), None);
        assert_eq!(graph.destination_edges(&"zz"), None);
        assert_eq!(graph.end_points(&"zz"), None);
        assert_eq!(graph.to_point(&"zz"), None);
    }

    #[test]
    fn test_absent_vertex_queries() {
        let graph = sample();

        assert_eq!(graph.degree(&"x"), 0);
        assert!(graph.ancestors(&"x").is_empty());
        assert!(graph.descendants(&"x").is_empty());
        assert!(graph.in_edges(&"x").is_empty());
        assert!(graph.connected_edges(&"x").is_empty());
    }

    #[test]
    fn test_enumeration_order_after_removal() {
        let mut graph: Graph<&str, &str> = Graph::new();
        graph.add_vertex("a");
        graph.add_vertex("b");
        graph.add_vertex("c");
        graph.remove_vertex(&"a");
        graph.add_vertex("a");

        assert_eq!(graph.vertices(), vec!["b", "c", "a"]);
    }
}
