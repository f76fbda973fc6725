//! # 结构因子图表生成
//!
//! 使用 `plotters` 库绘制 S(q) 与 c(q)。
//!
//! ## 功能
//! - 上下两栏：S(q)（上）、c(q)（下）
//! - S(q) 发散点（非有限值）不参与绘制和坐标范围
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/sq.rs`, `commands/scan.rs` 调用
//! - 使用 `model/structure.rs` 的 StructureFactor
//! - 使用 `plotters` 渲染图表

use crate::error::{HsError, Result};
use crate::model::StructureFactor;

use plotters::prelude::*;
use std::path::Path;

/// 图表配置
#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub use_svg: bool,
}

/// 生成 S(q) / c(q) 图表
pub fn generate_structure_plot(
    sf: &StructureFactor,
    output_path: &Path,
    options: &PlotOptions,
) -> Result<()> {
    let size = (options.width, options.height);
    if options.use_svg {
        let root = SVGBackend::new(output_path, size).into_drawing_area();
        draw_structure_chart(&root, sf, &options.title)?;
        root.present().map_err(|e| HsError::Plot(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, size).into_drawing_area();
        draw_structure_chart(&root, sf, &options.title)?;
        root.present().map_err(|e| HsError::Plot(e.to_string()))?;
    }
    Ok(())
}

/// 有限值的坐标范围（上下各留 5% 边距）
pub fn value_range(values: &[f64]) -> (f64, f64) {
    let (min, max) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    if !min.is_finite() {
        return (0.0, 1.0);
    }
    if (max - min).abs() < 1e-12 {
        return (min - 0.5, max + 0.5);
    }

    let margin = (max - min) * 0.05;
    (min - margin, max + margin)
}

/// 绘制两栏图表
fn draw_structure_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    sf: &StructureFactor,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| HsError::Plot(format!("{:?}", e)))?;

    let root = root
        .titled(title, ("sans-serif", 28))
        .map_err(|e| HsError::Plot(format!("{:?}", e)))?;
    let panels = root.split_evenly((2, 1));

    let x_min = sf.q.first().copied().unwrap_or(0.0);
    let x_max = sf.q.last().copied().unwrap_or(1.0).max(x_min + 1e-6);

    draw_panel(
        &panels[0],
        &sf.q,
        &sf.sq,
        (x_min, x_max),
        "S(q)",
        RGBColor(0, 102, 204),
        Some(1.0),
    )?;
    draw_panel(
        &panels[1],
        &sf.q,
        &sf.cq,
        (x_min, x_max),
        "c(q)",
        RGBColor(204, 51, 0),
        Some(0.0),
    )?;

    Ok(())
}

/// 绘制单栏曲线，可选水平参考线
fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    q: &[f64],
    values: &[f64],
    x_range: (f64, f64),
    y_desc: &str,
    color: RGBColor,
    reference: Option<f64>,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let (y_min, y_max) = value_range(values);

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range.0..x_range.1, y_min..y_max)
        .map_err(|e| HsError::Plot(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("q")
        .y_desc(y_desc)
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| HsError::Plot(format!("{:?}", e)))?;

    if let Some(y_ref) = reference {
        if y_ref > y_min && y_ref < y_max {
            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![(x_range.0, y_ref), (x_range.1, y_ref)],
                    BLACK.mix(0.3).stroke_width(1),
                )))
                .map_err(|e| HsError::Plot(format!("{:?}", e)))?;
        }
    }

    chart
        .draw_series(LineSeries::new(
            q.iter()
                .zip(values)
                .filter(|(_, v)| v.is_finite())
                .map(|(x, y)| (*x, *y)),
            color.stroke_width(2),
        ))
        .map_err(|e| HsError::Plot(format!("{:?}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_range_with_margin() {
        let (lo, hi) = value_range(&[0.0, 10.0]);
        assert!((lo - (-0.5)).abs() < 1e-12);
        assert!((hi - 10.5).abs() < 1e-12);
    }

    #[test]
    fn test_value_range_ignores_divergence() {
        let (lo, hi) = value_range(&[1.0, f64::INFINITY, 3.0, f64::NAN]);
        assert!(lo < 1.0 && lo > 0.8);
        assert!(hi > 3.0 && hi < 3.2);
    }

    #[test]
    fn test_value_range_degenerate() {
        assert_eq!(value_range(&[1.0, 1.0]), (0.5, 1.5));
        assert_eq!(value_range(&[]), (0.0, 1.0));
        assert_eq!(value_range(&[f64::INFINITY]), (0.0, 1.0));
    }
}
