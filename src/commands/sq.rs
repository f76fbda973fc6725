//! # sq 子命令实现
//!
//! 构造 PY 硬球模型，在网格上求 S(q) 与 c(q)，打印概要并写出
//! 图表或数据文件。
//!
//! ## 依赖关系
//! - 使用 `cli/sq.rs` 定义的 SqArgs
//! - 使用 `model/` 进行计算
//! - 使用 `utils/output.rs` 输出

use super::write_output;
use crate::cli::sq::SqArgs;
use crate::cli::OutputFormat;

use hsliquid::error::Result;
use hsliquid::grid;
use hsliquid::model::{HardSpherePY, StructureFactor, Q_LOW};
use hsliquid::scan;
use hsliquid::utils::output;

/// 执行 S(q) 计算
pub fn execute(args: SqArgs) -> Result<()> {
    output::print_header("Percus-Yevick Hard-Sphere Structure Factor");

    let model = HardSpherePY::new(args.phi)?;
    let params = model.params();
    output::print_info("Model parameters");
    output::print_param("phi", &format!("{:.4}", params.phi()));
    output::print_param("density", &format!("{:.6}", params.density()));
    output::print_param("alpha", &format!("{:.6}", params.alpha()));
    output::print_param("beta", &format!("{:.6}", params.beta()));

    let q = grid::build_grid(&args.range, args.points)?;
    output::print_info(&format!(
        "Grid: {} points in [{:.4}, {:.4}]",
        q.len(),
        q[0],
        q[q.len() - 1]
    ));

    let low_points = q.iter().filter(|&&x| x < Q_LOW).count();
    if low_points > 0 {
        output::print_info(&format!(
            "{} points below q = {} use the small-q expansion",
            low_points, Q_LOW
        ));
    }

    let sf = model.evaluate(&q)?;
    let summary = scan::summarize(&model, &sf)?;
    output::print_success(&format!(
        "S(0) = {:.6}, main peak S({:.4}) = {:.4}",
        summary.s_zero, summary.peak_q, summary.peak_s
    ));

    let diverging = sf.sq.iter().filter(|s| !s.is_finite()).count();
    if diverging > 0 {
        output::print_warning(&format!(
            "S(q) diverges at {} grid points (density * c(q) = 1)",
            diverging
        ));
    }

    let format = args
        .format
        .unwrap_or_else(|| OutputFormat::from_path(&args.output));
    let title = args
        .title
        .clone()
        .unwrap_or_else(|| format!("Percus-Yevick hard spheres, φ = {:.3}", params.phi()));

    write_output(&sf, &args.output, format, &title, (args.width, args.height))?;

    if args.table > 0 {
        print_structure_table(&sf, args.table);
    }

    output::print_success(&format!("Output saved to '{}'", args.output.display()));

    Ok(())
}

/// 打印 S(q) 表格（在网格上均匀抽取行）
fn print_structure_table(sf: &StructureFactor, count: usize) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "q")]
        q: String,
        #[tabled(rename = "S(q)")]
        sq: String,
        #[tabled(rename = "c(q)")]
        cq: String,
    }

    let stride = sf.len().div_ceil(count).max(1);
    let rows: Vec<Row> = sf
        .rows()
        .step_by(stride)
        .map(|(q, s, c)| Row {
            q: format!("{:.4}", q),
            sq: format!("{:.6}", s),
            cq: format!("{:.6}", c),
        })
        .collect();

    if !rows.is_empty() {
        output::print_header(&format!("S(q) at {} grid points", rows.len()));
        println!("{}", Table::new(&rows));
    }
}
