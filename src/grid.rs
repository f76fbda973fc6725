//! # 波矢网格
//!
//! 构造计算用的 q 网格。网格由调用方持有，以切片形式传给模型。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `scan.rs` 使用
//! - 使用 `error.rs`

use crate::error::{HsError, Result};

/// 默认网格下限（以硬球直径为单位的倒数）
pub const DEFAULT_Q_MIN: f64 = 0.2;
/// 默认网格上限
pub const DEFAULT_Q_MAX: f64 = 39.8;
/// 默认网格点数
pub const DEFAULT_POINTS: usize = 100;

/// 等间距网格，包含两个端点
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + i as f64 * step })
                .collect()
        }
    }
}

/// 范围分隔符 '-' 的位置（跳过首字符和指数符号 `e-`/`E-`）
fn range_separator(range: &str) -> Option<usize> {
    let bytes = range.as_bytes();
    (1..bytes.len()).find(|&i| bytes[i] == b'-' && !matches!(bytes[i - 1], b'e' | b'E'))
}

/// 解析 q 范围 (e.g., "0.2-39.8", "1e-3-10")
pub fn parse_range(range: &str) -> Result<(f64, f64)> {
    let (lower, upper) = range_separator(range)
        .map(|i| (&range[..i], &range[i + 1..]))
        .ok_or_else(|| HsError::InvalidRange(range.to_string()))?;

    let min: f64 = lower
        .trim()
        .parse()
        .map_err(|_| HsError::InvalidRange(range.to_string()))?;
    let max: f64 = upper
        .trim()
        .parse()
        .map_err(|_| HsError::InvalidRange(range.to_string()))?;

    if min.is_nan() || min <= 0.0 || max <= min || !max.is_finite() {
        return Err(HsError::InvalidRange(format!(
            "{} (must be 0 < min < max)",
            range
        )));
    }

    Ok((min, max))
}

/// 由范围字符串和点数构造网格
pub fn build_grid(range: &str, points: usize) -> Result<Vec<f64>> {
    if points == 0 {
        return Err(HsError::InvalidArgument(
            "Number of grid points must be positive".to_string(),
        ));
    }
    let (min, max) = parse_range(range)?;
    Ok(linspace(min, max, points))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_default_grid() {
        let q = linspace(DEFAULT_Q_MIN, DEFAULT_Q_MAX, DEFAULT_POINTS);

        assert_eq!(q.len(), 100);
        assert_eq!(q[0], 0.2);
        assert_eq!(q[99], 39.8);
        assert!((q[1] - q[0] - 0.4).abs() < 1e-12);
        assert!(q.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_linspace_degenerate() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("0.2-39.8").unwrap(), (0.2, 39.8));
        assert_eq!(parse_range("1 - 10").unwrap(), (1.0, 10.0));

        assert!(parse_range("10").is_err());
        assert!(parse_range("0-10").is_err());
        assert!(parse_range("5-1").is_err());
        assert!(parse_range("a-b").is_err());
        assert!(parse_range("1-2-3").is_err());
    }

    #[test]
    fn test_parse_range_scientific_notation() {
        assert_eq!(parse_range("1e-3-10").unwrap(), (1e-3, 10.0));
        assert_eq!(parse_range("2.5E-2-4e1").unwrap(), (0.025, 40.0));
        assert_eq!(parse_range("1e-3-1e-1").unwrap(), (1e-3, 0.1));
        assert!(parse_range("-1-10").is_err());
    }

    #[test]
    fn test_build_grid() {
        let q = build_grid("0.5-1.5", 11).unwrap();
        assert_eq!(q.len(), 11);
        assert!((q[5] - 1.0).abs() < 1e-12);

        assert!(matches!(
            build_grid("0.5-1.5", 0),
            Err(HsError::InvalidArgument(_))
        ));
    }
}
