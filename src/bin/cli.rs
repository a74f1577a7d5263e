//! NetGraph CLI 工具
//!
//! 从 CSV 边表载入或随机生成一张图，然后执行单条命令或进入交互模式

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use netgraph::cli::{CommandResult, Console, PrintMode, Printer};
use netgraph::{EdgeListImporter, Graph, GraphOptions, GraphSummary, RandomGraph};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "netgraph-cli")]
#[command(about = "NetGraph 命令行工具")]
struct Args {
    /// CSV 边表文件
    #[arg(short, long, conflicts_with = "generate")]
    input: Option<PathBuf>,

    /// 边表首行为表头
    #[arg(long)]
    headers: bool,

    /// 随机生成图: <节点数>,<连边尝试次数>
    #[arg(short, long, value_parser = parse_generate)]
    generate: Option<(usize, usize)>,

    /// 随机种子
    #[arg(long)]
    seed: Option<u64>,

    /// 禁止自环
    #[arg(long)]
    no_self_loops: bool,

    /// 以 JSON 输出
    #[arg(long)]
    json: bool,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,

    /// 执行单个命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,
}

fn parse_generate(s: &str) -> Result<(usize, usize), String> {
    let (vertices, edges) = s
        .split_once(',')
        .ok_or_else(|| format!("期望 <节点数>,<连边数>，得到 {}", s))?;
    let vertices = vertices
        .trim()
        .parse()
        .map_err(|e| format!("无效的节点数: {}", e))?;
    let edges = edges
        .trim()
        .parse()
        .map_err(|e| format!("无效的连边数: {}", e))?;
    Ok((vertices, edges))
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_graph(args: &Args) -> anyhow::Result<Graph<String, String>> {
    let options = GraphOptions::new().with_self_loops(!args.no_self_loops);

    if let Some(path) = &args.input {
        let mut graph = Graph::with_options(options);
        let stats = EdgeListImporter::new()
            .with_headers(args.headers)
            .import_csv(path, &mut graph)
            .with_context(|| format!("导入 {:?} 失败", path))?;
        if stats.errors > 0 {
            eprintln!("{} 跳过 {} 行格式错误的记录", "警告:".yellow(), stats.errors);
        }
        return Ok(graph);
    }

    if let Some((vertices, edges)) = args.generate {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        return Ok(RandomGraph::new(vertices, edges)
            .with_options(options)
            .generate(&mut rng));
    }

    Ok(Graph::with_options(options))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let graph = load_graph(&args)?;
    let mode = if args.json {
        PrintMode::Json
    } else {
        PrintMode::Table
    };
    let mut console = Console::new(graph, Printer::new(mode));

    // 单个命令模式
    if let Some(command) = &args.execute {
        if let CommandResult::Continue(output) = console.handle_line(command)? {
            print!("{}", output);
        }
        return Ok(());
    }

    let summary = GraphSummary::collect(console.graph());
    println!("NetGraph CLI - 稀疏有向图");
    println!("=========================");
    println!("  节点数: {}", summary.vertex_count);
    println!("  连边数: {}", summary.edge_count);
    println!("  聚类数: {}", summary.cluster_count);
    println!("\n输入 'help' 查看命令列表，'quit' 退出\n");

    let stdin = io::stdin();
    loop {
        print!("{}", "netgraph> ".green());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match console.handle_line(line) {
            Ok(CommandResult::Exit) => break,
            Ok(CommandResult::Continue(output)) => print!("{}", output),
            Err(e) => println!("{} {}", "错误:".red(), e),
        }
    }

    println!("再见！");
    Ok(())
}
