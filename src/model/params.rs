//! # Percus-Yevick 模型参数
//!
//! 由堆积分数 φ 导出 PY 闭合的解析系数：
//!
//! ```text
//! η   = (1 - φ)^4
//! α   = (1 + 2φ)^2 / η
//! β   = -(1 + φ/2)^2 · 6φ / η
//! ρ   = 6φ / π
//! ```
//!
//! ## 依赖关系
//! - 被 `model/correlation.rs`, `model/structure.rs` 使用
//! - 使用 `error.rs`

use crate::error::{HsError, Result};

use std::f64::consts::PI;

/// PY 硬球模型参数（构造后不可变）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParameters {
    /// 堆积分数 φ
    phi: f64,
    /// 系数 α
    alpha: f64,
    /// 系数 β
    beta: f64,
    /// 数密度 ρ（以硬球直径为长度单位）
    density: f64,
}

impl ModelParameters {
    /// 由堆积分数构造参数，φ 必须位于 [0, 1)
    pub fn new(phi: f64) -> Result<Self> {
        // NaN 也会落入此分支
        if !(0.0..1.0).contains(&phi) {
            return Err(HsError::InvalidPackingFraction { phi });
        }

        let eta_cmp = (1.0 - phi).powi(4);
        let alpha = (1.0 + 2.0 * phi).powi(2) / eta_cmp;
        let beta = -(1.0 + 0.5 * phi).powi(2) * 6.0 * phi / eta_cmp;
        let density = phi * 6.0 / PI;

        Ok(Self {
            phi,
            alpha,
            beta,
            density,
        })
    }

    pub fn phi(&self) -> f64 {
        self.phi
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    /// PY 压缩性极限 S(q→0) = (1-φ)^4 / (1+2φ)^2
    pub fn compressibility_limit(&self) -> f64 {
        (1.0 - self.phi).powi(4) / (1.0 + 2.0 * self.phi).powi(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_half_packing() {
        let p = ModelParameters::new(0.5).unwrap();

        assert!((p.alpha() - 64.0).abs() < 1e-12);
        assert!((p.beta() - (-75.0)).abs() < 1e-12);
        assert!((p.density() - 3.0 / PI).abs() < 1e-12);
        assert!((p.density() - 0.954930).abs() < 1e-6);
    }

    #[test]
    fn test_params_ideal_gas() {
        let p = ModelParameters::new(0.0).unwrap();

        assert_eq!(p.density(), 0.0);
        assert_eq!(p.alpha(), 1.0);
        assert_eq!(p.beta(), 0.0);
    }

    #[test]
    fn test_params_reject_out_of_domain() {
        for phi in [1.0, -0.1, 1.5, f64::NAN, f64::INFINITY] {
            let err = ModelParameters::new(phi).unwrap_err();
            assert!(matches!(err, HsError::InvalidPackingFraction { .. }));
        }
    }

    #[test]
    fn test_params_finite_close_to_one() {
        let p = ModelParameters::new(0.999).unwrap();
        assert!(p.alpha().is_finite());
        assert!(p.beta().is_finite());
    }

    #[test]
    fn test_compressibility_limit() {
        let p = ModelParameters::new(0.5).unwrap();
        assert!((p.compressibility_limit() - 1.0 / 64.0).abs() < 1e-15);
    }
}
