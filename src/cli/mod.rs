//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `sq`: 计算单个堆积分数下的 S(q) 与 c(q)
//! - `scan`: 并行扫描一组堆积分数
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: sq, scan

pub mod scan;
pub mod sq;

use clap::{Parser, Subcommand, ValueEnum};

/// hsliquid - Percus-Yevick 硬球液体结构因子
#[derive(Parser)]
#[command(name = "hsliquid")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Percus-Yevick hard-sphere structure factor for mode-coupling liquid models",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compute S(q) and c(q) for one packing fraction
    Sq(sq::SqArgs),

    /// Compute S(q) for a list of packing fractions in parallel
    Scan(scan::ScanArgs),
}

/// 输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// CSV data file (q, S(q), c(q))
    Csv,
    /// XY data file (tab separated, '#' header)
    Xy,
}

impl OutputFormat {
    /// 对应的文件扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Csv => "csv",
            OutputFormat::Xy => "xy",
        }
    }

    /// 从文件扩展名推断输出格式
    pub fn from_path(path: &std::path::Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .as_deref()
        {
            Some("svg") => OutputFormat::Svg,
            Some("csv") => OutputFormat::Csv,
            Some("xy") | Some("dat") | Some("txt") => OutputFormat::Xy,
            _ => OutputFormat::Png,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path(Path::new("a.SVG")), OutputFormat::Svg);
        assert_eq!(OutputFormat::from_path(Path::new("a.csv")), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_path(Path::new("a.dat")), OutputFormat::Xy);
        assert_eq!(OutputFormat::from_path(Path::new("a")), OutputFormat::Png);
    }

    #[test]
    fn test_sq_defaults() {
        let cli = Cli::try_parse_from(["hsliquid", "sq"]).unwrap();
        let Commands::Sq(args) = cli.command else {
            panic!("expected sq subcommand");
        };
        assert_eq!(args.range, "0.2-39.8");
        assert_eq!(args.points, 100);
        assert!(args.format.is_none());
    }

    #[test]
    fn test_scan_arguments() {
        let cli = Cli::try_parse_from([
            "hsliquid", "scan", "--phis", "0.1,0.5", "-f", "csv", "-j", "2",
        ])
        .unwrap();
        let Commands::Scan(args) = cli.command else {
            panic!("expected scan subcommand");
        };
        assert_eq!(args.phis, "0.1,0.5");
        assert_eq!(args.format, OutputFormat::Csv);
        assert_eq!(args.jobs, 2);
    }
}
