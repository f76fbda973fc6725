//! # 统一错误处理模块
//!
//! 定义 hsliquid 的所有错误类型，使用 `thiserror` 派生。
//!
//! 结构因子发散（ρ·c(q) → 1）不是错误，不在此处建模。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// hsliquid 统一错误类型
#[derive(Error, Debug)]
pub enum HsError {
    // ─────────────────────────────────────────────────────────────
    // 定义域错误
    // ─────────────────────────────────────────────────────────────
    #[error("Packing fraction must satisfy 0 <= phi < 1, got {phi}")]
    InvalidPackingFraction { phi: f64 },

    #[error("Wavevector must be positive and finite, got q[{index}] = {q}")]
    InvalidWavevector { index: usize, q: f64 },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid range format: {0}")]
    InvalidRange(String),

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 绘图错误
    // ─────────────────────────────────────────────────────────────
    #[error("Plotting failed: {0}")]
    Plot(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, HsError>;
