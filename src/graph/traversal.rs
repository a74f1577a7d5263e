//! 分层遍历
//!
//! 祖先、后代、相邻节点的广度优先遍历，以及相邻节点的层次表。
//! 所有遍历共用同一套规则：维护已访问集合与当前前沿，
//! 每一跳的新前沿为前沿的相邻节点中尚未访问者；
//! 新前沿为空或达到指定深度时停止。起点本身视为已访问。

use super::graph::{Graph, GraphId};
use crate::error::Error;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 遍历方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraceDirection {
    /// 正向遍历（沿连出边，后代）
    Forward,
    /// 反向遍历（沿连入边，祖先）
    Backward,
    /// 双向遍历（相邻节点）
    Both,
}

impl FromStr for TraceDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forward" | "f" | "descendants" => Ok(Self::Forward),
            "backward" | "back" | "b" | "ancestors" => Ok(Self::Backward),
            "both" | "neighbours" | "neighbors" => Ok(Self::Both),
            other => Err(Error::ParseError(format!("未知的遍历方向: {}", other))),
        }
    }
}

impl fmt::Display for TraceDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
            Self::Both => "both",
        };
        f.write_str(name)
    }
}

/// 一次分层遍历的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk<V> {
    /// 按发现顺序排列的所有节点，不含起点
    pub discovered: Vec<V>,
    /// 最后一个非空前沿；一跳都没走出去时为空
    pub frontier: Vec<V>,
    /// 产生非空前沿的跳数
    pub hops: usize,
}

impl<V> Default for Walk<V> {
    fn default() -> Self {
        Self {
            discovered: Vec::new(),
            frontier: Vec::new(),
            hops: 0,
        }
    }
}

impl<V: GraphId, E: GraphId> Graph<V, E> {
    /// 从起点出发按方向分层遍历，`max_depth` 为 None 时不限深度
    pub fn walk(&self, start: &V, direction: TraceDirection, max_depth: Option<usize>) -> Walk<V> {
        let mut walk = Walk::default();
        if !self.contains_vertex(start) {
            return walk;
        }

        let mut visited: IndexSet<V> = IndexSet::new();
        visited.insert(start.clone());
        let mut frontier = vec![start.clone()];

        while max_depth.map_or(true, |depth| walk.hops < depth) {
            let mut next = Vec::new();
            for vertex in &frontier {
                for step in self.step(vertex, direction) {
                    if visited.insert(step.clone()) {
                        next.push(step.clone());
                    }
                }
            }

            if next.is_empty() {
                break;
            }
            walk.hops += 1;
            frontier = next;
        }

        if walk.hops > 0 {
            walk.frontier = frontier;
        }
        walk.discovered = visited.into_iter().skip(1).collect();
        walk
    }

    /// 按方向可达的节点（不含起点）
    pub fn reachable(&self, start: &V, direction: TraceDirection, max_depth: Option<usize>) -> Vec<V> {
        self.walk(start, direction, max_depth).discovered
    }

    /// 单跳的相邻节点，按方向选择连入表和/或连出表
    fn step<'a>(&'a self, vertex: &V, direction: TraceDirection) -> impl Iterator<Item = &'a V> + 'a {
        let adjacency = self.vertices.get(vertex);
        let incoming = adjacency
            .filter(|_| direction != TraceDirection::Forward)
            .into_iter()
            .flat_map(|adjacency| adjacency.first.keys());
        let outgoing = adjacency
            .filter(|_| direction != TraceDirection::Backward)
            .into_iter()
            .flat_map(|adjacency| adjacency.second.keys());
        incoming.chain(outgoing)
    }

    // ==================== 祖先 ====================

    /// 指定深度内的所有祖先
    pub fn ancestors_in_depth(&self, vertex: &V, depth: usize) -> Vec<V> {
        self.walk(vertex, TraceDirection::Backward, Some(depth)).discovered
    }

    /// 恰在指定深度的祖先
    pub fn ancestors_with_depth(&self, vertex: &V, depth: usize) -> Vec<V> {
        self.walk(vertex, TraceDirection::Backward, Some(depth)).frontier
    }

    /// 所有直接或间接的祖先
    pub fn all_ancestors(&self, vertex: &V) -> Vec<V> {
        self.walk(vertex, TraceDirection::Backward, None).discovered
    }

    // ==================== 后代 ====================

    /// 指定深度内的所有后代
    pub fn descendants_in_depth(&self, vertex: &V, depth: usize) -> Vec<V> {
        self.walk(vertex, TraceDirection::Forward, Some(depth)).discovered
    }

    /// 恰在指定深度的后代
    pub fn descendants_with_depth(&self, vertex: &V, depth: usize) -> Vec<V> {
        self.walk(vertex, TraceDirection::Forward, Some(depth)).frontier
    }

    /// 所有直接或间接的后代
    pub fn all_descendants(&self, vertex: &V) -> Vec<V> {
        self.walk(vertex, TraceDirection::Forward, None).discovered
    }

    // ==================== 相邻节点 ====================

    /// 指定深度内的所有相邻节点（忽略方向）
    pub fn neighbours_in_depth(&self, vertex: &V, depth: usize) -> Vec<V> {
        self.walk(vertex, TraceDirection::Both, Some(depth)).discovered
    }

    /// 恰在指定深度的相邻节点
    pub fn neighbours_with_depth(&self, vertex: &V, depth: usize) -> Vec<V> {
        self.walk(vertex, TraceDirection::Both, Some(depth)).frontier
    }

    /// 节点所在的连通子图，起点排在首位
    pub fn all_neighbours(&self, vertex: &V) -> Vec<V> {
        if !self.contains_vertex(vertex) {
            return Vec::new();
        }

        let walk = self.walk(vertex, TraceDirection::Both, None);
        let mut all = Vec::with_capacity(walk.discovered.len() + 1);
        all.push(vertex.clone());
        all.extend(walk.discovered);
        all
    }

    // ==================== 层次表 ====================

    /// 指定层次以内的相邻节点及其首次发现时的层次
    ///
    /// 起点记为 0，之后记录外层循环的序号：直接相邻的节点同样记为 0，
    /// 两跳的节点记为 1，依此类推。
    pub fn neighbour_distance_map(&self, vertex: &V, max_depth: usize) -> IndexMap<V, usize> {
        self.distance_map(vertex, Some(max_depth))
    }

    /// 整个连通子图的层次表，记录规则同 [`Graph::neighbour_distance_map`]
    pub fn all_neighbour_distance_map(&self, vertex: &V) -> IndexMap<V, usize> {
        self.distance_map(vertex, None)
    }

    fn distance_map(&self, start: &V, max_depth: Option<usize>) -> IndexMap<V, usize> {
        let mut map = IndexMap::new();
        if !self.contains_vertex(start) {
            return map;
        }

        map.insert(start.clone(), 0);
        let mut frontier = vec![start.clone()];
        let mut depth = 0;

        while !frontier.is_empty() && max_depth.map_or(true, |max| depth < max) {
            let mut next = Vec::new();
            for vertex in &frontier {
                for neighbour in self.step(vertex, TraceDirection::Both) {
                    if !map.contains_key(neighbour) {
                        map.insert(neighbour.clone(), depth);
                        next.push(neighbour.clone());
                    }
                }
            }
            frontier = next;
            depth += 1;
        }

        map
    }
}
