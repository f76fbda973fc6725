//! # 堆积分数扫描
//!
//! 对一组 φ 分别构造模型并提取 S(q) 的特征量：
//! - `s_zero`: q → 0 极限（PY 压缩性）
//! - `peak_q`, `peak_s`: 网格上的主峰位置与高度
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 调用
//! - 使用 `model/` 求值
//! - 使用 `export.rs` 写出汇总

use crate::error::{HsError, Result};
use crate::model::{HardSpherePY, LiquidStructureModel, StructureFactor};

use serde::Serialize;
use std::collections::HashSet;
use tabled::Tabled;

/// 求 S(0) 时使用的波矢（落在低 q 展开分支内）
const Q_ZERO_PROBE: f64 = 1e-6;

/// 单个 φ 的扫描汇总
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct ScanSummary {
    #[tabled(rename = "φ", display_with = "fmt4")]
    pub phi: f64,
    #[tabled(rename = "ρ", display_with = "fmt4")]
    pub density: f64,
    #[tabled(rename = "S(0)", display_with = "fmt6")]
    pub s_zero: f64,
    #[tabled(rename = "q_peak", display_with = "fmt4")]
    pub peak_q: f64,
    #[tabled(rename = "S(q_peak)", display_with = "fmt4")]
    pub peak_s: f64,
}

fn fmt4(v: &f64) -> String {
    format!("{:.4}", v)
}

fn fmt6(v: &f64) -> String {
    format!("{:.6}", v)
}

/// 解析逗号分隔的 φ 列表 (e.g., "0.1,0.2,0.3")
pub fn parse_phi_list(input: &str) -> Result<Vec<f64>> {
    let phis = input
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .map_err(|_| HsError::InvalidArgument(format!("Invalid packing fraction '{}'", s)))
        })
        .collect::<Result<Vec<f64>>>()?;

    if phis.is_empty() {
        return Err(HsError::InvalidArgument(
            "Packing fraction list is empty".to_string(),
        ));
    }

    // 每个 φ 对应一个输出文件，标签必须唯一
    let mut seen = HashSet::new();
    for &phi in &phis {
        if !seen.insert(phi_label(phi)) {
            return Err(HsError::InvalidArgument(format!(
                "Duplicate packing fraction '{}'",
                phi
            )));
        }
    }

    Ok(phis)
}

/// 计算单个模型的汇总
pub fn summarize(model: &HardSpherePY, sf: &StructureFactor) -> Result<ScanSummary> {
    let s_zero = model.structure_factor(&[Q_ZERO_PROBE])?[0];
    let (peak_q, peak_s) = sf.main_peak().unwrap_or((f64::NAN, f64::NAN));

    Ok(ScanSummary {
        phi: sf.phi,
        density: sf.density,
        s_zero,
        peak_q,
        peak_s,
    })
}

/// 对单个 φ 求值并汇总
pub fn evaluate_phi(phi: f64, grid: &[f64]) -> Result<(StructureFactor, ScanSummary)> {
    let model = HardSpherePY::new(phi)?;
    let sf = model.evaluate(grid)?;
    let summary = summarize(&model, &sf)?;
    Ok((sf, summary))
}

/// 输出文件名中的 φ 标签，不同的 φ 得到不同的标签 (e.g., 0.5 -> "0.5")
pub fn phi_label(phi: f64) -> String {
    format!("{}", phi)
}
