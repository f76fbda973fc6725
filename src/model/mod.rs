//! # 液体结构模型
//!
//! Percus-Yevick 闭合下硬球液体的解析结构模型。
//!
//! ## 子模块
//! - `params`: 由堆积分数导出模型系数
//! - `correlation`: 直接关联函数 c(q)（双分支求值）
//! - `structure`: 静态结构因子 S(q)
//! - `percus_yevick`: 模型实例，实现 `LiquidStructureModel`
//!
//! ## 依赖关系
//! - 被 `commands/`, `scan.rs` 以及外部动力学求解器使用
//! - 使用 `error.rs`

pub mod correlation;
pub mod params;
pub mod percus_yevick;
pub mod structure;

pub use correlation::{Branch, BranchPartition, DirectCorrelationEvaluator, Q_LOW};
pub use params::ModelParameters;
pub use percus_yevick::HardSpherePY;
pub use structure::{StructureFactor, StructureFactorEvaluator};

use crate::error::Result;

/// 液体结构模型接口
///
/// 模耦合（MCT）求解器只通过此接口获取静态输入：数密度、
/// 结构因子和直接关联函数。返回序列与输入网格逐点对齐。
pub trait LiquidStructureModel {
    /// 数密度 ρ
    fn density(&self) -> f64;

    /// 结构因子 S(q)
    fn structure_factor(&self, q: &[f64]) -> Result<Vec<f64>>;

    /// 直接关联函数 c(q)
    fn direct_correlation(&self, q: &[f64]) -> Result<Vec<f64>>;
}
