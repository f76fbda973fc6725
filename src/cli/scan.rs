//! # scan 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/scan.rs`

use super::OutputFormat;

use clap::Args;
use std::path::PathBuf;

/// scan 子命令参数
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Comma separated packing fractions (e.g., "0.1,0.3,0.5")
    #[arg(long, default_value = "0.1,0.2,0.3,0.4,0.5")]
    pub phis: String,

    /// Wavevector range in units of the inverse sphere diameter (e.g., "0.2-39.8")
    #[arg(short, long, default_value = "0.2-39.8")]
    pub range: String,

    /// Number of grid points (linearly spaced, endpoints included)
    #[arg(short = 'n', long, default_value_t = 100)]
    pub points: usize,

    /// Output directory, one file per packing fraction
    #[arg(short, long, default_value = "scan")]
    pub output: PathBuf,

    /// Output format for the per-phi files
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Write the summary table to this CSV file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 900)]
    pub height: u32,
}
