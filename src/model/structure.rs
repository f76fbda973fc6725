//! # 静态结构因子 S(q)
//!
//! 由直接关联函数通过 Ornstein-Zernike 关系得到结构因子：
//!
//! ```text
//! S(q) = 1 / (1 - ρ c(q))
//! ```
//!
//! ρ c(q) → 1 时 S(q) 发散（液体结构失稳），结果按 IEEE 浮点值
//! （可能为 ±∞）原样返回，不视为错误。
//!
//! ## 依赖关系
//! - 被 `model/percus_yevick.rs` 调用
//! - 使用 `model/correlation.rs` 求 c(q)

use crate::error::Result;
use crate::model::{DirectCorrelationEvaluator, ModelParameters};

/// 结构因子计算结果
#[derive(Debug, Clone)]
pub struct StructureFactor {
    /// 堆积分数 φ
    pub phi: f64,
    /// 数密度 ρ
    pub density: f64,
    /// 波矢网格
    pub q: Vec<f64>,
    /// 结构因子 S(q)
    pub sq: Vec<f64>,
    /// 直接关联函数 c(q)
    pub cq: Vec<f64>,
}

impl StructureFactor {
    /// 网格点数
    pub fn len(&self) -> usize {
        self.q.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
    }

    /// 按行迭代 (q, S, c)
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.q
            .iter()
            .zip(&self.sq)
            .zip(&self.cq)
            .map(|((&q, &s), &c)| (q, s, c))
    }

    /// S(q) 的主峰位置和高度（忽略非有限值）
    pub fn main_peak(&self) -> Option<(f64, f64)> {
        self.q
            .iter()
            .zip(&self.sq)
            .filter(|(_, s)| s.is_finite())
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(&q, &s)| (q, s))
    }
}

/// 由 c(q) 计算 S(q)
pub fn structure_from_correlation(density: f64, cq: &[f64]) -> Vec<f64> {
    cq.iter().map(|&c| 1.0 / (1.0 - density * c)).collect()
}

/// 结构因子求值器
pub struct StructureFactorEvaluator;

impl StructureFactorEvaluator {
    /// 返回 (S(q), c(q))
    pub fn evaluate(params: &ModelParameters, grid: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
        let cq = DirectCorrelationEvaluator::evaluate(params, grid)?;
        let sq = structure_from_correlation(params.density(), &cq);
        Ok((sq, cq))
    }

    /// 返回包含网格与参数的完整结果
    pub fn evaluate_record(params: &ModelParameters, grid: &[f64]) -> Result<StructureFactor> {
        let (sq, cq) = Self::evaluate(params, grid)?;
        Ok(StructureFactor {
            phi: params.phi(),
            density: params.density(),
            q: grid.to_vec(),
            sq,
            cq,
        })
    }
}
