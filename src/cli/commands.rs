//! 控制台命令处理
//!
//! 解析一行输入为命令，并在图上执行

use crate::cli::printer::Printer;
use crate::error::{Error, Result};
use crate::graph::{Graph, TraceDirection};
use crate::stats::GraphSummary;

/// 遍历深度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// 单跳
    OneHop,
    /// 指定深度以内
    Limited(usize),
    /// 不限深度
    Unbounded,
}

/// 控制台命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Stats,
    Vertex(String),
    Edge(String),
    Traverse {
        direction: TraceDirection,
        vertex: String,
        depth: Depth,
    },
    Frontier {
        direction: TraceDirection,
        vertex: String,
        depth: usize,
    },
    Distance {
        vertex: String,
        depth: Option<usize>,
    },
    Clusters,
    Subgraph(String),
    AddVertex(String),
    AddEdge {
        edge: String,
        from: String,
        to: String,
    },
    RemoveVertex(String),
    RemoveEdge(String),
    RemoveEdgeWithEndPoints(String),
}

/// 控制台命令执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// 继续运行，附带输出
    Continue(String),
    /// 退出程序
    Exit,
}

impl Command {
    /// 解析一行输入
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some((name, args)) = parts.split_first() else {
            return Err(Error::InvalidCommand("空命令".to_string()));
        };

        let command = match name.to_lowercase().as_str() {
            "help" | "h" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            "stats" | "info" => Self::Stats,
            "clusters" => Self::Clusters,
            "vertex" | "v" => Self::Vertex(arg(args, 0, "vertex <节点>")?),
            "edge" | "e" => Self::Edge(arg(args, 0, "edge <连边>")?),
            "neighbours" | "neighbors" | "n" => traverse(TraceDirection::Both, args)?,
            "ancestors" | "a" => traverse(TraceDirection::Backward, args)?,
            "descendants" | "d" => traverse(TraceDirection::Forward, args)?,
            "frontier" => {
                let usage = "frontier <方向> <节点> <深度>";
                Self::Frontier {
                    direction: arg(args, 0, usage)?.parse()?,
                    vertex: arg(args, 1, usage)?,
                    depth: parse_depth(&arg(args, 2, usage)?)?,
                }
            }
            "distance" => Self::Distance {
                vertex: arg(args, 0, "distance <节点> [深度]")?,
                depth: args.get(1).map(|d| parse_depth(d)).transpose()?,
            },
            "subgraph" => Self::Subgraph(arg(args, 0, "subgraph <节点>")?),
            "add-vertex" => Self::AddVertex(arg(args, 0, "add-vertex <节点>")?),
            "add-edge" => {
                let usage = "add-edge <连边> <起点> <终点>";
                Self::AddEdge {
                    edge: arg(args, 0, usage)?,
                    from: arg(args, 1, usage)?,
                    to: arg(args, 2, usage)?,
                }
            }
            "remove-vertex" => Self::RemoveVertex(arg(args, 0, "remove-vertex <节点>")?),
            "remove-edge" => Self::RemoveEdge(arg(args, 0, "remove-edge <连边>")?),
            "remove-edge-with-end-points" => Self::RemoveEdgeWithEndPoints(arg(
                args,
                0,
                "remove-edge-with-end-points <连边>",
            )?),
            other => {
                return Err(Error::InvalidCommand(format!(
                    "未知命令: {}。输入 'help' 查看帮助。",
                    other
                )))
            }
        };

        Ok(command)
    }
}

fn arg(args: &[&str], index: usize, usage: &str) -> Result<String> {
    args.get(index)
        .map(|s| s.to_string())
        .ok_or_else(|| Error::InvalidCommand(format!("用法: {}", usage)))
}

fn parse_depth(s: &str) -> Result<usize> {
    s.parse()
        .map_err(|_| Error::ParseError(format!("无效的深度: {}", s)))
}

fn traverse(direction: TraceDirection, args: &[&str]) -> Result<Command> {
    let vertex = arg(args, 0, "neighbours|ancestors|descendants <节点> [深度|*]")?;
    let depth = match args.get(1) {
        None => Depth::OneHop,
        Some(&"*") => Depth::Unbounded,
        Some(d) => Depth::Limited(parse_depth(d)?),
    };
    Ok(Command::Traverse {
        direction,
        vertex,
        depth,
    })
}

/// 控制台：持有图与打印器
pub struct Console {
    graph: Graph<String, String>,
    printer: Printer,
}

impl Console {
    pub fn new(graph: Graph<String, String>, printer: Printer) -> Self {
        Self { graph, printer }
    }

    pub fn graph(&self) -> &Graph<String, String> {
        &self.graph
    }

    /// 解析并执行一行输入
    pub fn handle_line(&mut self, line: &str) -> Result<CommandResult> {
        let command = Command::parse(line)?;
        self.execute(&command)
    }

    /// 执行命令
    pub fn execute(&mut self, command: &Command) -> Result<CommandResult> {
        let printer = &self.printer;
        let graph = &mut self.graph;

        let output = match command {
            Command::Quit => return Ok(CommandResult::Exit),
            Command::Help => Printer::print_help(),
            Command::Stats => printer.print_summary(&GraphSummary::collect(&*graph))?,
            Command::Clusters => printer.print_clusters(&graph.cluster_by_connective())?,

            Command::Vertex(vertex) => {
                require_vertex(graph, vertex)?;
                printer.print_properties(
                    &format!("节点 {}", vertex),
                    &[
                        ("degree", graph.degree(vertex).to_string()),
                        ("in_degree", graph.in_degree(vertex).to_string()),
                        ("out_degree", graph.out_degree(vertex).to_string()),
                        ("ancestors", graph.ancestors(vertex).join(", ")),
                        ("descendants", graph.descendants(vertex).join(", ")),
                        ("in_edges", graph.in_edges(vertex).join(", ")),
                        ("out_edges", graph.out_edges(vertex).join(", ")),
                    ],
                )?
            }

            Command::Edge(edge) => {
                let Some(endpoints) = graph.end_points(edge) else {
                    return Err(Error::EdgeNotFound(edge.clone()));
                };
                let sources = graph.source_edges(edge).unwrap_or_default();
                let destinations = graph.destination_edges(edge).unwrap_or_default();
                printer.print_properties(
                    &format!("连边 {}", edge),
                    &[
                        ("from", endpoints.first().clone()),
                        ("to", endpoints.second().clone()),
                        ("source_edges", sources.join(", ")),
                        ("destination_edges", destinations.join(", ")),
                    ],
                )?
            }

            Command::Traverse {
                direction,
                vertex,
                depth,
            } => {
                require_vertex(graph, vertex)?;
                let vertices = match (direction, depth) {
                    (TraceDirection::Forward, Depth::OneHop) => graph.descendants(vertex),
                    (TraceDirection::Backward, Depth::OneHop) => graph.ancestors(vertex),
                    (TraceDirection::Both, Depth::OneHop) => graph.neighbours(vertex),
                    (direction, Depth::Limited(d)) => graph.reachable(vertex, *direction, Some(*d)),
                    (direction, Depth::Unbounded) => graph.reachable(vertex, *direction, None),
                };
                printer.print_vertices(&format!("{} ({})", vertex, direction), &vertices)?
            }

            Command::Frontier {
                direction,
                vertex,
                depth,
            } => {
                require_vertex(graph, vertex)?;
                let vertices = match direction {
                    TraceDirection::Forward => graph.descendants_with_depth(vertex, *depth),
                    TraceDirection::Backward => graph.ancestors_with_depth(vertex, *depth),
                    TraceDirection::Both => graph.neighbours_with_depth(vertex, *depth),
                };
                printer.print_vertices(
                    &format!("{} ({}, 深度 {})", vertex, direction, depth),
                    &vertices,
                )?
            }

            Command::Distance { vertex, depth } => {
                require_vertex(graph, vertex)?;
                let distances = match depth {
                    Some(d) => graph.neighbour_distance_map(vertex, *d),
                    None => graph.all_neighbour_distance_map(vertex),
                };
                printer.print_distance_map(&distances)?
            }

            Command::Subgraph(vertex) => {
                require_vertex(graph, vertex)?;
                let subgraph = graph.descendant_subgraph(vertex);
                printer.print_vertices(
                    &format!("子图 {}: {} 条连边", vertex, subgraph.edge_count()),
                    &subgraph.vertices(),
                )?
            }

            Command::AddVertex(vertex) => {
                let added = graph.add_vertex(vertex.clone());
                printer.print_message(&outcome("添加节点", vertex, added))?
            }

            Command::AddEdge { edge, from, to } => {
                let added = graph.add_edge(edge.clone(), from.clone(), to.clone());
                printer.print_message(&outcome("添加连边", edge, added))?
            }

            Command::RemoveVertex(vertex) => {
                let removed = graph.remove_vertex(vertex);
                printer.print_message(&outcome("删除节点", vertex, removed))?
            }

            Command::RemoveEdge(edge) => {
                let removed = graph.remove_edge(edge);
                printer.print_message(&outcome("删除连边", edge, removed))?
            }

            Command::RemoveEdgeWithEndPoints(edge) => {
                let removed = graph.remove_edge_with_end_points(edge);
                printer.print_message(&outcome("删除连边及端点", edge, removed))?
            }
        };

        Ok(CommandResult::Continue(output))
    }
}

fn require_vertex(graph: &Graph<String, String>, vertex: &String) -> Result<()> {
    if graph.contains_vertex(vertex) {
        Ok(())
    } else {
        Err(Error::VertexNotFound(vertex.clone()))
    }
}

fn outcome(action: &str, target: &str, success: bool) -> String {
    if success {
        format!("{} {}: 成功", action, target)
    } else {
        format!("{} {}: 未执行", action, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console() -> Console {
        let mut graph = Graph::new();
        graph.add_edge("ab".to_string(), "a".to_string(), "b".to_string());
        graph.add_edge("bc".to_string(), "b".to_string(), "c".to_string());
        Console::new(graph, Printer::default())
    }

    fn output(result: CommandResult) -> String {
        match result {
            CommandResult::Continue(output) => output,
            CommandResult::Exit => panic!("unexpected exit"),
        }
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("q").unwrap(), Command::Quit);
        assert_eq!(
            Command::parse("descendants a *").unwrap(),
            Command::Traverse {
                direction: TraceDirection::Forward,
                vertex: "a".to_string(),
                depth: Depth::Unbounded,
            }
        );
        assert_eq!(
            Command::parse("N a 2").unwrap(),
            Command::Traverse {
                direction: TraceDirection::Both,
                vertex: "a".to_string(),
                depth: Depth::Limited(2),
            }
        );
        assert_eq!(
            Command::parse("distance a").unwrap(),
            Command::Distance {
                vertex: "a".to_string(),
                depth: None,
            }
        );
        assert_eq!(
            Command::parse("frontier back c 2").unwrap(),
            Command::Frontier {
                direction: TraceDirection::Backward,
                vertex: "c".to_string(),
                depth: 2,
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Command::parse(""), Err(Error::InvalidCommand(_))));
        assert!(matches!(Command::parse("launch"), Err(Error::InvalidCommand(_))));
        assert!(matches!(Command::parse("add-edge e a"), Err(Error::InvalidCommand(_))));
        assert!(matches!(Command::parse("ancestors a deep"), Err(Error::ParseError(_))));
        assert!(matches!(Command::parse("frontier up a 1"), Err(Error::ParseError(_))));
    }

    #[test]
    fn test_execute_queries() {
        let mut console = console();

        let text = output(console.handle_line("descendants a *").unwrap());
        assert!(text.contains("2 vertex(es)"));

        let text = output(console.handle_line("edge bc").unwrap());
        assert!(text.contains("ab"));

        assert!(matches!(
            console.handle_line("vertex zz"),
            Err(Error::VertexNotFound(_))
        ));
        assert!(matches!(
            console.handle_line("edge zz"),
            Err(Error::EdgeNotFound(_))
        ));
        assert_eq!(console.handle_line("quit").unwrap(), CommandResult::Exit);
    }

    #[test]
    fn test_execute_mutations() {
        let mut console = console();

        let text = output(console.handle_line("add-edge ab2 a b").unwrap());
        assert!(text.contains("未执行"));

        output(console.handle_line("add-edge cd c d").unwrap());
        assert!(console.graph().contains_vertex(&"d".to_string()));

        output(console.handle_line("remove-vertex b").unwrap());
        assert_eq!(console.graph().edges(), vec!["cd".to_string()]);

        output(console.handle_line("remove-edge-with-end-points cd").unwrap());
        assert_eq!(console.graph().vertices(), vec!["a".to_string()]);
    }
}
