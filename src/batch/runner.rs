//! # 批量执行器
//!
//! 并行执行批量处理任务。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代，结果保持输入顺序
//! - 进度条显示
//! - 错误收集与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{HsError, Result};
use crate::utils::progress;

use rayon::prelude::*;

/// 单个工作项处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult<T> {
    /// 处理成功
    Success(T),
    /// 跳过（如输出文件已存在），附带说明
    Skipped(T, String),
    /// 处理失败
    Failed(String, String), // (工作项标签, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug)]
pub struct BatchResult<T> {
    /// 成功数量
    pub success: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 成功和跳过项的输出（按输入顺序）
    pub outputs: Vec<T>,
    /// 跳过说明
    pub skips: Vec<String>,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl<T> Default for BatchResult<T> {
    fn default() -> Self {
        Self {
            success: 0,
            skipped: 0,
            failed: 0,
            outputs: Vec::new(),
            skips: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<T> BatchResult<T> {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult<T>) {
        match result {
            ProcessResult::Success(out) => {
                self.success += 1;
                self.outputs.push(out);
            }
            ProcessResult::Skipped(out, note) => {
                self.skipped += 1;
                self.outputs.push(out);
                self.skips.push(note);
            }
            ProcessResult::Failed(label, err) => {
                self.failed += 1;
                self.failures.push((label, err));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
    /// 是否显示进度条
    show_progress: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器，`jobs == 0` 时使用全部 CPU
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self {
            jobs,
            show_progress: true,
        }
    }

    /// 设置是否显示进度条
    pub fn progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// 并行作业数
    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理工作项列表
    pub fn run<I, T, F>(&self, items: &[I], processor: F) -> Result<BatchResult<T>>
    where
        I: Sync,
        T: Send,
        F: Fn(&I) -> ProcessResult<T> + Sync + Send,
    {
        let pb = progress::create_progress_bar(items.len() as u64, "Processing");
        if !self.show_progress {
            pb.set_draw_target(indicatif::ProgressDrawTarget::hidden());
        }

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| HsError::InvalidArgument(format!("Thread pool: {}", e)))?;

        let results: Vec<ProcessResult<T>> = pool.install(|| {
            items
                .par_iter()
                .map(|item| {
                    let result = processor(item);
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        // 汇总结果
        let mut batch_result = BatchResult::default();
        for result in results {
            batch_result.merge(result);
        }

        Ok(batch_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runner_keeps_order_and_counts() {
        let items: Vec<u32> = (0..50).collect();
        let runner = BatchRunner::new(4).progress(false);

        let result = runner
            .run(&items, |&i| match i % 10 {
                0 => ProcessResult::Failed(i.to_string(), "boom".to_string()),
                5 => ProcessResult::Skipped(i * 2, "exists".to_string()),
                _ => ProcessResult::Success(i * 2),
            })
            .unwrap();

        assert_eq!(result.total(), 50);
        assert_eq!(result.failed, 5);
        assert_eq!(result.skipped, 5);
        assert_eq!(result.success, 40);
        assert!(result.outputs.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(result.failures[0], ("0".to_string(), "boom".to_string()));
        assert_eq!(result.skips.len(), 5);
    }

    #[test]
    fn test_runner_auto_jobs() {
        assert!(BatchRunner::new(0).jobs() >= 1);
        assert_eq!(BatchRunner::new(3).jobs(), 3);
    }
}
