//! 数据导入模块
//!
//! 从 CSV 边表导入节点与连边。每行可以是：
//! - `edge,from,to`：指定标识的连边
//! - `from,to`：连边标识取 `"{from}-{to}"`
//! - `vertex`：孤立节点
//!
//! 以 `#` 开头的行视为注释。

use crate::error::{Error, Result};
use crate::graph::Graph;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// 导入统计
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportStats {
    /// 新增节点数（含连边自动创建的端点）
    pub vertices_imported: usize,
    pub edges_imported: usize,
    /// 因重复而被图拒绝的行数
    pub rejected: usize,
    /// 格式错误而跳过的行数
    pub errors: usize,
    pub duration_ms: u64,
}

/// 边表导入器
#[derive(Debug, Clone)]
pub struct EdgeListImporter {
    has_headers: bool,
    delimiter: u8,
    strict: bool,
}

impl Default for EdgeListImporter {
    fn default() -> Self {
        Self::new()
    }
}

/// 一行边表记录
enum Row<'a> {
    Vertex(&'a str),
    Edge {
        edge: Option<&'a str>,
        from: &'a str,
        to: &'a str,
    },
}

impl EdgeListImporter {
    /// 创建导入器（默认无表头、逗号分隔、跳过错误行）
    pub fn new() -> Self {
        Self {
            has_headers: false,
            delimiter: b',',
            strict: false,
        }
    }

    /// 设置是否有表头
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// 设置分隔符
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// 严格模式下遇到格式错误的行立即失败
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// 从文件导入到新图
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<(Graph<String, String>, ImportStats)> {
        let mut graph = Graph::new();
        let stats = self.import_csv(path, &mut graph)?;
        Ok((graph, stats))
    }

    /// 从 CSV 文件导入
    pub fn import_csv<P: AsRef<Path>>(
        &self,
        path: P,
        graph: &mut Graph<String, String>,
    ) -> Result<ImportStats> {
        let file = File::open(path)?;
        self.import_reader(file, graph)
    }

    /// 从任意输入流导入
    pub fn import_reader<R: Read>(
        &self,
        reader: R,
        graph: &mut Graph<String, String>,
    ) -> Result<ImportStats> {
        let start = std::time::Instant::now();
        let mut reader = ReaderBuilder::new()
            .has_headers(self.has_headers)
            .delimiter(self.delimiter)
            .flexible(true)
            .trim(Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut stats = ImportStats::default();
        let vertices_before = graph.vertex_count();

        for record in reader.records() {
            let record = record?;
            let Some(row) = parse_row(&record) else {
                if self.strict {
                    let line = record.position().map_or(0, |p| p.line());
                    return Err(Error::ImportError(format!(
                        "第 {} 行格式错误: {} 个字段",
                        line,
                        record.len()
                    )));
                }
                stats.errors += 1;
                continue;
            };

            let accepted = match row {
                Row::Vertex(vertex) => graph.add_vertex(vertex.to_string()),
                Row::Edge { edge, from, to } => {
                    let edge = edge.map_or_else(|| format!("{}-{}", from, to), str::to_string);
                    let added = graph.add_edge(edge, from.to_string(), to.to_string());
                    if added {
                        stats.edges_imported += 1;
                    }
                    added
                }
            };
            if !accepted {
                stats.rejected += 1;
            }
        }

        stats.vertices_imported = graph.vertex_count() - vertices_before;
        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            vertices = stats.vertices_imported,
            edges = stats.edges_imported,
            rejected = stats.rejected,
            errors = stats.errors,
            "edge list imported"
        );
        Ok(stats)
    }
}

/// 解析一行，字段数不符或存在空字段时返回 None
fn parse_row(record: &StringRecord) -> Option<Row<'_>> {
    if record.iter().any(str::is_empty) {
        return None;
    }
    match record.len() {
        1 => Some(Row::Vertex(record.get(0)?)),
        2 => Some(Row::Edge {
            edge: None,
            from: record.get(0)?,
            to: record.get(1)?,
        }),
        3 => Some(Row::Edge {
            edge: record.get(0),
            from: record.get(1)?,
            to: record.get(2)?,
        }),
        _ => None,
    }
}
