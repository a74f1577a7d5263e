//! 命令行界面
//!
//! 命令解析执行与结果打印

mod commands;
mod printer;

pub use commands::{Command, CommandResult, Console, Depth};
pub use printer::{PrintMode, Printer};
