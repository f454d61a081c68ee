// 该文件是 Shanan QC （山南西风） 项目的一部分。
// src/main.rs - 项目主程序
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

mod args;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shanan_qc::{
  check::TaskValidator,
  input::{InputWrapper, SourceOptions},
  job::{Job, ReportJob, install_interrupt_handler},
  output::OutputWrapper,
};

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let args = args::Args::parse();

  info!("项目: {}", args.project);
  info!("任务来源: {}", args.source);
  info!("报告输出: {}", args.out);
  if let Some(limit) = args.limit {
    info!("任务数上限: {}", limit);
  }

  let config = args.check_config();
  info!(
    "过小框阈值: {} px，过大框阈值: {}，重复框 IoU 阈值: {}",
    config.min_side, config.max_area_ratio, config.duplicate_iou
  );

  let options = SourceOptions {
    project: args.project.clone(),
    page_size: args.page_size,
    api_key: args.api_key.clone(),
  };
  let input = InputWrapper::open(&args.source, &options)?;
  let output = OutputWrapper::open(&args.out)?;
  let interrupt = install_interrupt_handler()?;

  let summary = ReportJob::default()
    .with_limit(args.limit)
    .with_interrupt(interrupt)
    .run_job(input, TaskValidator::new(config), output)?;

  info!("总任务数: {}", summary.tasks);
  info!("问题任务数: {}", summary.flagged_tasks);
  info!("错误数: {}，警告数: {}", summary.errors, summary.warnings);
  println!(
    "Wrote quality check results for {} task(s) → {}",
    summary.flagged_tasks,
    summary.output.display()
  );

  Ok(())
}
