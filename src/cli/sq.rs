//! # sq 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/sq.rs`

use super::OutputFormat;

use clap::Args;
use std::path::PathBuf;

/// sq 子命令参数
#[derive(Args, Debug)]
pub struct SqArgs {
    /// Packing fraction phi, 0 <= phi < 1
    #[arg(short, long, env = "HSLIQUID_PHI", default_value_t = 0.5)]
    pub phi: f64,

    /// Wavevector range in units of the inverse sphere diameter (e.g., "0.2-39.8")
    #[arg(short, long, default_value = "0.2-39.8")]
    pub range: String,

    /// Number of grid points (linearly spaced, endpoints included)
    #[arg(short = 'n', long, default_value_t = 100)]
    pub points: usize,

    /// Output file path
    #[arg(short, long, default_value = "structure_factor.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Number of rows to print in the summary table (0 to disable)
    #[arg(long, default_value_t = 10)]
    pub table: usize,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 900)]
    pub height: u32,

    /// Title for the plot (default: packing fraction)
    #[arg(long)]
    pub title: Option<String>,
}
