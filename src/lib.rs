//! # hsliquid - Percus-Yevick 硬球液体结构
//!
//! 计算硬球液体在 Percus-Yevick 闭合下的直接关联函数 c(q) 与静态
//! 结构因子 S(q)，作为模耦合理论（MCT）求解器的静态输入。
//!
//! ## 模块
//! - `model` - 模型参数、c(q) 双分支求值、S(q)、`LiquidStructureModel`
//! - `grid` - 波矢网格
//! - `scan` - 堆积分数扫描与汇总
//! - `export` - CSV / XY 导出
//! - `plot` - PNG / SVG 图表
//! - `batch` - 并行批量执行
//! - `utils` - 终端输出与进度条
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── model/    (核心求值)
//!   ├── grid.rs   (网格)
//!   ├── scan.rs   (扫描, 使用 model/)
//!   ├── export.rs (导出, 使用 model/, scan.rs)
//!   ├── plot.rs   (绘图, 使用 model/)
//!   ├── batch/    (并行执行, 使用 utils/)
//!   ├── utils/    (工具函数)
//!   └── error.rs  (错误处理)
//! ```
//!
//! ## 示例
//! ```
//! use hsliquid::model::{HardSpherePY, LiquidStructureModel};
//!
//! let model = HardSpherePY::new(0.5).unwrap();
//! let q = hsliquid::grid::linspace(0.2, 39.8, 100);
//! let sq = model.structure_factor(&q).unwrap();
//! assert_eq!(sq.len(), q.len());
//! ```

pub mod batch;
pub mod error;
pub mod export;
pub mod grid;
pub mod model;
pub mod plot;
pub mod scan;
pub mod utils;

pub use error::{HsError, Result};
pub use model::{HardSpherePY, LiquidStructureModel, ModelParameters, StructureFactor};
