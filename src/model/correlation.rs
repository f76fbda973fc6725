//! # 直接关联函数 c(q)
//!
//! 实现 PY 硬球直接关联函数的双分支求值。
//!
//! ## 算法概述
//! 1. 校验波矢网格（q > 0 且有限）
//! 2. 按阈值 `Q_LOW` 将每个下标划分到高 q 或低 q 分支
//! 3. 高 q 分支使用三角函数闭式解
//! 4. 低 q 分支使用 q² 的 Taylor 展开（截断到 q⁴），避免 (1-cos q)/q⁴
//!    一类项在 q → 0 时的灾难性抵消
//!
//! 两个分支在 `Q_LOW` 附近一致。
//!
//! ## 依赖关系
//! - 被 `model/structure.rs` 调用
//! - 使用 `model/params.rs` 的 ModelParameters
//! - 使用 `rayon` 提供并行求值

use crate::error::{HsError, Result};
use crate::model::ModelParameters;

use rayon::prelude::*;
use std::f64::consts::PI;

/// 低 q 展开与闭式解的切换阈值
pub const Q_LOW: f64 = 0.05;

/// 求值分支
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// q >= Q_LOW，三角函数闭式解
    High,
    /// q < Q_LOW，多项式展开
    Low,
}

/// 选择分支
pub fn branch(q: f64) -> Branch {
    if q >= Q_LOW {
        Branch::High
    } else {
        Branch::Low
    }
}

/// 网格的分支划分（下标列表，互不相交且覆盖全部下标）
#[derive(Debug, Clone, Default)]
pub struct BranchPartition {
    pub high: Vec<usize>,
    pub low: Vec<usize>,
}

impl BranchPartition {
    /// 划分后的总点数
    pub fn len(&self) -> usize {
        self.high.len() + self.low.len()
    }

    pub fn is_empty(&self) -> bool {
        self.high.is_empty() && self.low.is_empty()
    }
}

/// 校验波矢
fn check_wavevector(index: usize, q: f64) -> Result<()> {
    if q.is_finite() && q > 0.0 {
        Ok(())
    } else {
        Err(HsError::InvalidWavevector { index, q })
    }
}

/// 校验网格并按分支划分下标
pub fn partition(grid: &[f64]) -> Result<BranchPartition> {
    let mut part = BranchPartition::default();

    for (i, &q) in grid.iter().enumerate() {
        check_wavevector(i, q)?;
        match branch(q) {
            Branch::High => part.high.push(i),
            Branch::Low => part.low.push(i),
        }
    }

    Ok(part)
}

/// 高 q 分支：闭式解
pub fn c_high(params: &ModelParameters, q: f64) -> f64 {
    let alpha = params.alpha();
    let beta = params.beta();
    let phi = params.phi();

    let q2 = q * q;
    let q3 = q2 * q;
    let q4 = q2 * q2;
    let q6 = q4 * q2;
    let (sinq, cosq) = q.sin_cos();

    let term1 = 4.0 * PI * alpha * (cosq / q2 - sinq / q3);
    let term2 = 2.0
        * PI
        * alpha
        * phi
        * (cosq / q2 - 4.0 * sinq / q3 - 12.0 * cosq / q4 - 24.0 * ((1.0 - cosq) - q * sinq) / q6);
    let term3 = 8.0 * PI * beta * (0.5 * cosq / q2 - sinq / q3 + (1.0 - cosq) / q4);

    term1 + term2 + term3
}

/// 低 q 分支：q² 展开到 q⁴ 项
pub fn c_low(params: &ModelParameters, q: f64) -> f64 {
    let alpha = params.alpha();
    let beta = params.beta();
    let phi = params.phi();

    let q2 = q * q;
    let q4 = q2 * q2;

    let c0 = -PI * alpha / 3.0 * (4.0 + phi) - PI * beta;
    let c2 = PI * alpha * (2.0 / 15.0 + phi / 24.0) + PI * beta / 9.0;
    let c4 = PI * alpha * (1.0 / 210.0 + phi / 600.0) + PI * beta / 240.0;

    c0 + c2 * q2 - c4 * q4
}

/// 单点求值（按分支分派）
pub fn c_point(params: &ModelParameters, q: f64) -> f64 {
    match branch(q) {
        Branch::High => c_high(params, q),
        Branch::Low => c_low(params, q),
    }
}

/// 直接关联函数求值器
pub struct DirectCorrelationEvaluator;

impl DirectCorrelationEvaluator {
    /// 在整个网格上求 c(q)，结果与输入等长同序
    pub fn evaluate(params: &ModelParameters, grid: &[f64]) -> Result<Vec<f64>> {
        let part = partition(grid)?;

        log::debug!(
            "c(q): {} points, {} high-q, {} low-q",
            part.len(),
            part.high.len(),
            part.low.len()
        );

        let mut cq = vec![0.0; grid.len()];
        for &i in &part.high {
            cq[i] = c_high(params, grid[i]);
        }
        for &i in &part.low {
            cq[i] = c_low(params, grid[i]);
        }

        Ok(cq)
    }

    /// 并行求值，结果与 `evaluate` 完全一致
    pub fn evaluate_parallel(params: &ModelParameters, grid: &[f64]) -> Result<Vec<f64>> {
        grid.iter()
            .enumerate()
            .try_for_each(|(i, &q)| check_wavevector(i, q))?;

        Ok(grid.par_iter().map(|&q| c_point(params, q)).collect())
    }
}
