//! 结果打印器
//!
//! 提供表格和 JSON 两种输出格式

use crate::error::Result;
use crate::stats::GraphSummary;
use indexmap::IndexMap;
use prettytable::{format, row, Cell, Row, Table};
use serde::Serialize;
use serde_json::json;

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// JSON 模式
    Json,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> PrintMode {
        self.mode
    }

    /// 打印节点列表
    pub fn print_vertices(&self, title: &str, vertices: &[String]) -> Result<String> {
        match self.mode {
            PrintMode::Json => to_json(&json!({ "title": title, "vertices": vertices })),
            PrintMode::Table => {
                if vertices.is_empty() {
                    return Ok(format!("{}\nEmpty set\n", title));
                }
                let rows: Vec<Vec<String>> = vertices
                    .iter()
                    .enumerate()
                    .map(|(i, vertex)| vec![(i + 1).to_string(), vertex.clone()])
                    .collect();
                Ok(format!(
                    "{}\n{}{} vertex(es)\n",
                    title,
                    self.format_table(&["#", "Vertex"], &rows),
                    vertices.len()
                ))
            }
        }
    }

    /// 打印连通性聚类
    pub fn print_clusters(&self, clusters: &[Vec<String>]) -> Result<String> {
        match self.mode {
            PrintMode::Json => to_json(&json!({ "clusters": clusters })),
            PrintMode::Table => {
                if clusters.is_empty() {
                    return Ok("Empty set\n".to_string());
                }
                let rows: Vec<Vec<String>> = clusters
                    .iter()
                    .enumerate()
                    .map(|(i, cluster)| {
                        vec![
                            (i + 1).to_string(),
                            cluster.len().to_string(),
                            cluster.join(", "),
                        ]
                    })
                    .collect();
                Ok(format!(
                    "{}{} cluster(s)\n",
                    self.format_table(&["Cluster", "Size", "Vertices"], &rows),
                    clusters.len()
                ))
            }
        }
    }

    /// 打印节点层次表
    pub fn print_distance_map(&self, distances: &IndexMap<String, usize>) -> Result<String> {
        match self.mode {
            PrintMode::Json => to_json(distances),
            PrintMode::Table => {
                let rows: Vec<Vec<String>> = distances
                    .iter()
                    .map(|(vertex, depth)| vec![vertex.clone(), depth.to_string()])
                    .collect();
                Ok(self.format_table(&["Vertex", "Depth"], &rows))
            }
        }
    }

    /// 打印统计信息
    pub fn print_summary(&self, summary: &GraphSummary) -> Result<String> {
        match self.mode {
            PrintMode::Json => to_json(summary),
            PrintMode::Table => {
                let mut table = Table::new();
                table.set_format(*format::consts::FORMAT_BOX_CHARS);
                table.set_titles(row!["Property", "Value"]);
                table.add_row(row!["Vertex Count", summary.vertex_count]);
                table.add_row(row!["Edge Count", summary.edge_count]);
                table.add_row(row!["Isolated Vertices", summary.isolated_vertices]);
                table.add_row(row!["Self Loops", summary.self_loops]);
                table.add_row(row!["Max In Degree", summary.max_in_degree]);
                table.add_row(row!["Max Out Degree", summary.max_out_degree]);
                table.add_row(row![
                    "Average Degree",
                    format!("{:.3}", summary.average_degree)
                ]);
                table.add_row(row!["Clusters", summary.cluster_count]);
                table.add_row(row!["Largest Cluster", summary.largest_cluster]);
                Ok(table.to_string())
            }
        }
    }

    /// 打印属性列表（节点或连边详情）
    pub fn print_properties(&self, title: &str, properties: &[(&str, String)]) -> Result<String> {
        match self.mode {
            PrintMode::Json => {
                let map: serde_json::Map<String, serde_json::Value> = properties
                    .iter()
                    .map(|(key, value)| (key.to_string(), json!(value)))
                    .collect();
                to_json(&json!({ "title": title, "properties": map }))
            }
            PrintMode::Table => {
                let rows: Vec<Vec<String>> = properties
                    .iter()
                    .map(|(key, value)| vec![key.to_string(), value.clone()])
                    .collect();
                Ok(format!(
                    "{}\n{}",
                    title,
                    self.format_table(&["Property", "Value"], &rows)
                ))
            }
        }
    }

    /// 打印提示消息
    pub fn print_message(&self, message: &str) -> Result<String> {
        match self.mode {
            PrintMode::Json => to_json(&json!({ "message": message })),
            PrintMode::Table => Ok(format!("{}\n", message)),
        }
    }

    /// 表格格式
    fn format_table(&self, columns: &[&str], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 打印帮助信息
    pub fn print_help() -> String {
        r#"
═══════════════════════════════════════════════════════════════
                   NetGraph CLI 命令帮助
═══════════════════════════════════════════════════════════════

基础命令:
  help, h, ?                 显示帮助
  quit, exit, q              退出程序
  stats, info                显示图统计信息

查询:
  vertex, v <节点>           查看节点详情
  edge, e <连边>             查看连边端点及来源/目标连边
  neighbours, n <节点> [深度]
  ancestors, a <节点> [深度]
  descendants, d <节点> [深度]
                             相邻 / 祖先 / 后代节点
                             无深度为单跳，* 为不限深度
                             示例: descendants v1 3
  frontier <方向> <节点> <深度>
                             恰在指定深度的节点
                             方向: forward, backward, both
  distance <节点> [深度]     相邻节点层次表
  clusters                   依据连通性聚类
  subgraph <节点>            节点及全部后代构成的子图

修改:
  add-vertex <节点>
  add-edge <连边> <起点> <终点>
  remove-vertex <节点>
  remove-edge <连边>
  remove-edge-with-end-points <连边>

═══════════════════════════════════════════════════════════════
"#
        .to_string()
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut output = serde_json::to_string_pretty(value)?;
    output.push('\n');
    Ok(output)
}
