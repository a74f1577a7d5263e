//! 共享图
//!
//! 图本身不做任何同步。需要跨线程访问时，用一把读写锁包住整张图，
//! 每次调用对应一次加锁，保证连入表与连出表的成对更新对读者不可分割。

use super::graph::{Graph, GraphId};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// 由一把读写锁保护的图
pub struct SharedGraph<V, E> {
    inner: Arc<RwLock<Graph<V, E>>>,
}

impl<V, E> Clone for SharedGraph<V, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: GraphId, E: GraphId> Default for SharedGraph<V, E> {
    fn default() -> Self {
        Self::new(Graph::new())
    }
}

impl<V: GraphId, E: GraphId> From<Graph<V, E>> for SharedGraph<V, E> {
    fn from(graph: Graph<V, E>) -> Self {
        Self::new(graph)
    }
}

impl<V: GraphId, E: GraphId> SharedGraph<V, E> {
    pub fn new(graph: Graph<V, E>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// 获取读锁
    pub fn read(&self) -> RwLockReadGuard<'_, Graph<V, E>> {
        self.inner.read()
    }

    /// 获取写锁
    pub fn write(&self) -> RwLockWriteGuard<'_, Graph<V, E>> {
        self.inner.write()
    }

    /// 在读锁内执行
    pub fn with<R>(&self, f: impl FnOnce(&Graph<V, E>) -> R) -> R {
        f(&self.inner.read())
    }

    /// 在写锁内执行
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Graph<V, E>) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// 取回图；仍有其他句柄时返回自身
    pub fn try_unwrap(self) -> std::result::Result<Graph<V, E>, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}
