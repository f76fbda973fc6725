//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/` 以及库中的 `model/`, `export`, `plot`, `scan`
//! - 子模块: sq, scan

pub mod scan;
pub mod sq;

use crate::cli::{Commands, OutputFormat};

use hsliquid::error::Result;
use hsliquid::model::StructureFactor;
use hsliquid::plot::{self, PlotOptions};
use hsliquid::export;

use std::path::Path;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Sq(args) => sq::execute(args),
        Commands::Scan(args) => scan::execute(args),
    }
}

/// 按格式写出结果
fn write_output(
    sf: &StructureFactor,
    output: &Path,
    format: OutputFormat,
    title: &str,
    size: (u32, u32),
) -> Result<()> {
    match format {
        OutputFormat::Png | OutputFormat::Svg => {
            let options = PlotOptions {
                title: title.to_string(),
                width: size.0,
                height: size.1,
                use_svg: format == OutputFormat::Svg,
            };
            plot::generate_structure_plot(sf, output, &options)
        }
        OutputFormat::Csv => export::to_csv(sf, output),
        OutputFormat::Xy => export::to_xy(sf, output),
    }
}
