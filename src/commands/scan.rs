//! # scan 子命令实现
//!
//! 对一组堆积分数并行求 S(q)，每个 φ 写出一个文件，并汇总
//! S(0) 与主峰。
//!
//! ## 依赖关系
//! - 使用 `cli/scan.rs` 定义的 ScanArgs
//! - 使用 `batch/` 模块并行处理
//! - 使用 `scan.rs` 求值与汇总

use super::write_output;
use crate::cli::scan::ScanArgs;
use crate::cli::OutputFormat;

use hsliquid::batch::{BatchRunner, ProcessResult};
use hsliquid::error::{HsError, Result};
use hsliquid::scan::{self, ScanSummary};
use hsliquid::utils::output;
use hsliquid::{export, grid};

use std::fs;
use std::path::PathBuf;
use tabled::Table;

/// 每个 φ 共享的输出配置
struct ScanConfig {
    output_dir: PathBuf,
    format: OutputFormat,
    size: (u32, u32),
    overwrite: bool,
}

/// 执行堆积分数扫描
pub fn execute(args: ScanArgs) -> Result<()> {
    output::print_header("Packing Fraction Scan");

    let phis = scan::parse_phi_list(&args.phis)?;
    let q = grid::build_grid(&args.range, args.points)?;

    output::print_info(&format!(
        "{} packing fractions, {} grid points",
        phis.len(),
        q.len()
    ));

    fs::create_dir_all(&args.output).map_err(|e| HsError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let config = ScanConfig {
        output_dir: args.output.clone(),
        format: args.format,
        size: (args.width, args.height),
        overwrite: args.overwrite,
    };

    let runner = BatchRunner::new(args.jobs);
    log::info!("scan: {} jobs for {} packing fractions", runner.jobs(), phis.len());
    let result = runner.run(&phis, |&phi| process_phi(phi, &q, &config))?;

    output::print_separator();
    output::print_success(&format!(
        "Scan complete: {} success, {} skipped, {} failed",
        result.success, result.skipped, result.failed
    ));

    for note in &result.skips {
        output::print_skip(note);
    }

    if !result.failures.is_empty() {
        output::print_warning("Failed packing fractions:");
        for (phi, err) in &result.failures {
            output::print_error(&format!("  phi = {}: {}", phi, err));
        }
    }

    if !result.outputs.is_empty() {
        output::print_header("Structure Factor Summary");
        println!("{}", Table::new(&result.outputs));
    }

    if let Some(ref path) = args.summary {
        export::summary_to_csv(&result.outputs, path)?;
        output::print_success(&format!("Summary saved to '{}'", path.display()));
    }

    Ok(())
}

/// 单个 φ 的输出文件路径
fn output_path(config: &ScanConfig, phi: f64) -> PathBuf {
    let file_name = format!("sq_phi{}.{}", scan::phi_label(phi), config.format.extension());
    config.output_dir.join(file_name)
}

/// 处理单个堆积分数
fn process_phi(phi: f64, q: &[f64], config: &ScanConfig) -> ProcessResult<ScanSummary> {
    let output_file = output_path(config, phi);

    let (sf, summary) = match scan::evaluate_phi(phi, q) {
        Ok(r) => r,
        Err(e) => return ProcessResult::Failed(phi.to_string(), e.to_string()),
    };

    // 已存在的文件不重写，但汇总照常计入
    if output_file.exists() && !config.overwrite {
        return ProcessResult::Skipped(
            summary,
            format!("Output exists, skipping: {}", output_file.display()),
        );
    }

    let title = format!("Percus-Yevick hard spheres, φ = {:.3}", phi);
    match write_output(&sf, &output_file, config.format, &title, config.size) {
        Ok(()) => ProcessResult::Success(summary),
        Err(e) => ProcessResult::Failed(phi.to_string(), e.to_string()),
    }
}
