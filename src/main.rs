//! # hsliquid 命令行入口
//!
//! ## 子命令
//! - `sq` - 单个堆积分数下的 S(q) 与 c(q)
//! - `scan` - 一组堆积分数的并行扫描
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   └── commands/   (命令执行逻辑, 使用 hsliquid 库)
//! ```

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use hsliquid::utils::output;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    // RUST_LOG=debug 输出求值诊断
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
