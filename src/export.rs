//! # 数据导出
//!
//! 导出结构因子数据到 CSV 和 XY 格式。
//!
//! ## 支持格式
//! - CSV: q, S(q), c(q) 三列，带表头
//! - XY: 以 `#` 开头的注释头 + 制表符分隔的 q, S(q), c(q)
//! - 扫描汇总 CSV: 每个 φ 一行（serde 序列化）
//!
//! ## 依赖关系
//! - 被 `commands/sq.rs`, `commands/scan.rs` 调用
//! - 使用 `model/structure.rs` 的 StructureFactor
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{HsError, Result};
use crate::model::StructureFactor;
use crate::scan::ScanSummary;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

fn write_error(path: &Path) -> impl Fn(std::io::Error) -> HsError + '_ {
    move |e| HsError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    }
}

/// 导出为 CSV 格式
pub fn to_csv(sf: &StructureFactor, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["q", "S(q)", "c(q)"])?;

    for (q, s, c) in sf.rows() {
        wtr.write_record(&[
            format!("{:.6}", q),
            format!("{:.10e}", s),
            format!("{:.10e}", c),
        ])?;
    }

    wtr.flush().map_err(write_error(output_path))?;

    Ok(())
}

/// 导出为 XY 格式
pub fn to_xy(sf: &StructureFactor, output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(write_error(output_path))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "# Percus-Yevick hard-sphere structure factor")
        .map_err(write_error(output_path))?;
    writeln!(out, "# phi = {:.6}, density = {:.6}", sf.phi, sf.density)
        .map_err(write_error(output_path))?;
    writeln!(out, "# Columns: q, S(q), c(q)").map_err(write_error(output_path))?;
    writeln!(out, "#").map_err(write_error(output_path))?;

    for (q, s, c) in sf.rows() {
        writeln!(out, "{:.6}\t{:.10e}\t{:.10e}", q, s, c).map_err(write_error(output_path))?;
    }

    out.flush().map_err(write_error(output_path))?;

    Ok(())
}

/// 导出扫描汇总为 CSV 格式
pub fn summary_to_csv(summaries: &[ScanSummary], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for row in summaries {
        wtr.serialize(row)?;
    }

    wtr.flush().map_err(write_error(output_path))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid;
    use crate::model::HardSpherePY;

    use std::fs;

    fn sample() -> StructureFactor {
        let model = HardSpherePY::new(0.5).unwrap();
        model.evaluate(&grid::linspace(0.2, 39.8, 100)).unwrap()
    }

    #[test]
    fn test_csv_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sq.csv");

        to_csv(&sample(), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "q,S(q),c(q)");
        assert_eq!(lines.len(), 101);
        assert!(lines[1].starts_with("0.200000,"));
    }

    #[test]
    fn test_xy_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sq.xy");

        to_xy(&sample(), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let data: Vec<&str> = text.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(data.len(), 100);
        assert!(text.contains("phi = 0.500000"));

        let last: Vec<f64> = data[99]
            .split('\t')
            .map(|v| v.parse().unwrap())
            .collect();
        assert_eq!(last.len(), 3);
        assert!((last[0] - 39.8).abs() < 1e-9);
    }

    #[test]
    fn test_summary_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.csv");

        let rows = vec![ScanSummary {
            phi: 0.5,
            density: 0.95,
            s_zero: 0.015625,
            peak_q: 7.0,
            peak_s: 3.24,
        }];
        summary_to_csv(&rows, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("phi,density,s_zero,peak_q,peak_s"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("sq.xy");
        assert!(matches!(
            to_xy(&sample(), &path),
            Err(HsError::FileWriteError { .. })
        ));
    }
}
