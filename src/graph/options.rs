//! 图配置

use serde::{Deserialize, Serialize};

/// 图的构造选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    /// 是否允许自环（起始节点与结束节点相同的边）
    pub allow_self_loops: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            allow_self_loops: true,
        }
    }
}

impl GraphOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置是否允许自环
    pub fn with_self_loops(mut self, allow: bool) -> Self {
        self.allow_self_loops = allow;
        self
    }
}
