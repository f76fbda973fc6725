//! # PY 硬球模型实例
//!
//! 持有一次性构造的 `ModelParameters`，并把求值委托给
//! `DirectCorrelationEvaluator` 与 `StructureFactorEvaluator`。
//!
//! ## 依赖关系
//! - 被 `commands/sq.rs`, `scan.rs` 使用
//! - 实现 `model::LiquidStructureModel`

use crate::error::Result;
use crate::model::{
    DirectCorrelationEvaluator, LiquidStructureModel, ModelParameters, StructureFactor,
    StructureFactorEvaluator,
};

/// Percus-Yevick 硬球液体模型
#[derive(Debug, Clone, Copy)]
pub struct HardSpherePY {
    params: ModelParameters,
}

impl HardSpherePY {
    /// 由堆积分数创建模型
    pub fn new(phi: f64) -> Result<Self> {
        let params = ModelParameters::new(phi)?;
        Ok(Self { params })
    }

    /// 模型参数
    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    /// 一次求出 S(q) 与 c(q)
    pub fn evaluate(&self, q: &[f64]) -> Result<StructureFactor> {
        StructureFactorEvaluator::evaluate_record(&self.params, q)
    }
}

impl LiquidStructureModel for HardSpherePY {
    fn density(&self) -> f64 {
        self.params.density()
    }

    fn structure_factor(&self, q: &[f64]) -> Result<Vec<f64>> {
        StructureFactorEvaluator::evaluate(&self.params, q).map(|(sq, _)| sq)
    }

    fn direct_correlation(&self, q: &[f64]) -> Result<Vec<f64>> {
        DirectCorrelationEvaluator::evaluate(&self.params, q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HsError;
    use crate::grid;

    #[test]
    fn test_model_interface() {
        let model = HardSpherePY::new(0.5).unwrap();
        let q = grid::linspace(0.2, 39.8, 100);

        let sq = model.structure_factor(&q).unwrap();
        let cq = model.direct_correlation(&q).unwrap();
        assert_eq!(sq.len(), q.len());
        assert_eq!(cq.len(), q.len());

        let rho = model.density();
        for (s, c) in sq.iter().zip(&cq) {
            assert!((s * (1.0 - rho * c) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_model_through_trait_object() {
        let model: Box<dyn LiquidStructureModel + Send + Sync> =
            Box::new(HardSpherePY::new(0.0).unwrap());
        assert_eq!(model.density(), 0.0);
        assert_eq!(model.structure_factor(&[1.0, 2.0]).unwrap(), vec![1.0, 1.0]);
    }

    #[test]
    fn test_model_rejects_domain() {
        assert!(matches!(
            HardSpherePY::new(1.0),
            Err(HsError::InvalidPackingFraction { .. })
        ));

        let model = HardSpherePY::new(0.4).unwrap();
        assert!(model.structure_factor(&[1.0, -2.0]).is_err());
        assert!(model.evaluate(&[0.0]).is_err());
    }

    #[test]
    fn test_model_shared_between_threads() {
        let model = HardSpherePY::new(0.45).unwrap();
        let q = grid::linspace(0.1, 20.0, 64);
        let reference = model.evaluate(&q).unwrap();

        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    let r = model.evaluate(&q).unwrap();
                    assert_eq!(r.sq, reference.sq);
                });
            }
        });
    }
}
