// 该文件是 Shanan QC （山南西风） 项目的一部分。
// src/report.rs - 质检报告条目
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

use serde::Serialize;

use crate::{annotation::Task, issue::Issue};

/// 一个存在问题的任务在报告中的记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
  pub task_id: Option<String>,
  pub image_url: Option<String>,
  pub num_errors: usize,
  pub num_warnings: usize,
  pub issues: Vec<Issue>,
}

impl ReportEntry {
  /// 无问题的任务不进入报告，返回 None
  pub fn new(task: &Task, issues: Vec<Issue>) -> Option<Self> {
    if issues.is_empty() {
      return None;
    }

    Some(Self {
      task_id: task.task_id.clone(),
      image_url: task.image_url().map(str::to_owned),
      num_errors: issues.iter().filter(|i| i.is_error()).count(),
      num_warnings: issues.iter().filter(|i| i.is_warning()).count(),
      issues,
    })
  }
}
