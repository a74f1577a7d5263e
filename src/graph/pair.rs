//! 有序值对

use serde::{Deserialize, Serialize};

/// 有序值对（first, second）
///
/// 图内部用它保存边的端点（起始节点, 结束节点），
/// 以及每个节点的连接信息（连入表, 连出表）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderedPair<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<A, B> OrderedPair<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// 获取第一个值
    pub fn first(&self) -> &A {
        &self.first
    }

    /// 获取第二个值
    pub fn second(&self) -> &B {
        &self.second
    }

    /// 拆分为元组
    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for OrderedPair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}
