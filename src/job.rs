// 该文件是 Shanan QC （山南西风） 项目的一部分。
// src/job.rs - 质检任务流程
//
// 本文件根据 Apache 许可证第 2.0 版（以下简称“许可证”）授权使用；
// 除非遵守该许可证条款，否则您不得使用本文件。
// 您可通过以下网址获取许可证副本：
// http://www.apache.org/licenses/LICENSE-2.0
// 除非适用法律要求或书面同意，根据本许可协议分发的软件均按“原样”提供，
// 不附带任何形式的明示或暗示的保证或条件。
// 有关许可权限与限制的具体条款，请参阅本许可协议。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, Wareless Group

use std::{
  path::PathBuf,
  sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
  },
  thread,
  time::{Duration, Instant},
};

use anyhow::bail;
use tracing::{debug, info, warn};

use crate::{annotation::Task, check::Inspector, issue::Issue, output::Render};

pub trait Job<I, M, O>: Sized {
  type Error;
  fn run_job(self, input: I, model: M, output: O) -> Result<RunSummary, Self::Error>;
}

/// 一次运行的统计
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
  /// 已处理任务数
  pub tasks: usize,
  /// 写入报告的任务数
  pub flagged_tasks: usize,
  pub errors: usize,
  pub warnings: usize,
  /// 报告路径
  pub output: PathBuf,
}

impl RunSummary {
  fn record(&mut self, issues: &[Issue]) {
    self.tasks += 1;
    if !issues.is_empty() {
      self.flagged_tasks += 1;
    }
    self.errors += issues.iter().filter(|i| i.is_error()).count();
    self.warnings += issues.iter().filter(|i| i.is_warning()).count();
  }
}

/// 逐个拉取任务、质检并写出报告
#[derive(Default, Debug)]
pub struct ReportJob {
  limit: Option<usize>,
  interrupt: Option<Arc<AtomicBool>>,
}

impl ReportJob {
  /// 最多处理的任务数，0 表示无限制
  pub fn with_limit(mut self, limit: Option<usize>) -> Self {
    self.limit = limit.filter(|&n| n > 0);
    self
  }

  pub fn with_interrupt(mut self, interrupt: Arc<AtomicBool>) -> Self {
    self.interrupt = Some(interrupt);
    self
  }

  fn interrupted(&self) -> bool {
    self
      .interrupt
      .as_ref()
      .is_some_and(|flag| flag.load(Ordering::SeqCst))
  }
}

impl<
  IE: std::error::Error + Sync + Send + 'static,
  ME: std::error::Error + Sync + Send + 'static,
  RE: std::error::Error + Sync + Send + 'static,
  I: Iterator<Item = Result<Task, IE>>,
  M: Inspector<Input = Task, Output = Vec<Issue>, Error = ME>,
  O: Render<Task, Vec<Issue>, Error = RE>,
> Job<I, M, O> for ReportJob
{
  type Error = anyhow::Error;

  fn run_job(self, input: I, model: M, mut output: O) -> Result<RunSummary, Self::Error> {
    info!("开始质检...");
    let started = Instant::now();
    let mut summary = RunSummary::default();

    for task in input.take(self.limit.unwrap_or(usize::MAX)) {
      if self.interrupted() {
        warn!("中断信号接收，报告未完成");
        bail!("质检被中断，已处理 {} 个任务", summary.tasks);
      }

      let task = task?;
      let issues = model.inspect(&task)?;
      debug!(
        "任务 {}: {} 个问题",
        task.task_id.as_deref().unwrap_or("<unknown>"),
        issues.len()
      );
      summary.record(&issues);
      output.render_result(&task, issues)?;

      if summary.tasks % 100 == 0 {
        info!("已处理 {} 个任务，耗时: {:.2?}", summary.tasks, started.elapsed());
      }
    }

    if let Some(limit) = self.limit {
      if summary.tasks >= limit {
        info!("达到指定任务数 {}，停止拉取", limit);
      }
    }

    summary.output = output.finish()?;
    info!("质检完成，耗时: {:.2?}", started.elapsed());
    Ok(summary)
  }
}

/// 安装 Ctrl-C 处理，返回中断标志
///
/// 收到信号后当前任务处理完即停止；30 秒内未退出则强制结束进程。
pub fn install_interrupt_handler() -> anyhow::Result<Arc<AtomicBool>> {
  let flag = Arc::new(AtomicBool::new(false));
  let handler_flag = flag.clone();

  ctrlc::set_handler(move || {
    info!("收到中断信号，准备退出...");
    handler_flag.store(true, Ordering::SeqCst);
    thread::spawn(|| {
      thread::sleep(Duration::from_secs(30));
      warn!("强制退出程序");
      std::process::exit(1);
    });
  })?;

  Ok(flag)
}
