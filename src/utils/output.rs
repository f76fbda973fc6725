//! # 终端输出
//!
//! 统一的状态行、参数行与标题样式。状态标签宽度一致，便于对齐：
//!
//! ```text
//! [ ok ] Output saved to 'sq.png'
//! [info] Grid: 100 points in [0.2000, 39.8000]
//!        phi ......... 0.5000
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/`, `main.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 标题栏宽度
const RULE_WIDTH: usize = 64;
/// 参数行中名称列宽度
const KEY_WIDTH: usize = 12;

pub fn print_success(msg: &str) {
    println!("{} {}", "[ ok ]".green().bold(), msg);
}

/// 错误写到 stderr
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[fail]".red().bold(), msg);
}

pub fn print_warning(msg: &str) {
    println!("{} {}", "[warn]".yellow().bold(), msg);
}

pub fn print_info(msg: &str) {
    println!("{} {}", "[info]".blue().bold(), msg);
}

pub fn print_skip(msg: &str) {
    println!("{} {}", "[skip]".dimmed(), msg);
}

/// 参数行：名称以点填充到固定宽度
pub fn print_param(name: &str, value: &str) {
    println!("       {} {}", format_key(name).dimmed(), value.cyan());
}

fn format_key(name: &str) -> String {
    let dots = KEY_WIDTH.saturating_sub(name.chars().count() + 1).max(3);
    format!("{} {}", name, ".".repeat(dots))
}

/// 标题栏（双线）
pub fn print_header(title: &str) {
    let rule = "═".repeat(RULE_WIDTH);
    println!("\n{}", rule.cyan());
    println!(" hsliquid · {}", title.bold());
    println!("{}\n", rule.cyan());
}

/// 分节线（单线）
pub fn print_separator() {
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());
}
