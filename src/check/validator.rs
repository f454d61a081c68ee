// 该文件是 Shanan QC （山南西风） 项目的一部分。
// src/check/validator.rs - 单个任务的质检流程
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

use std::convert::Infallible;

use tracing::debug;

use crate::{
  annotation::Task,
  check::{
    CheckConfig, Inspector, check_bg_color_rules, check_duplicates, check_invalid_attr_value,
    check_invalid_label, check_missing_attribute, check_size,
  },
  issue::Issue,
};

/// 任务质检器
///
/// 无内部状态，相同输入总得到相同的问题列表。
#[derive(Debug, Clone, Default)]
pub struct TaskValidator {
  config: CheckConfig,
}

impl TaskValidator {
  pub fn new(config: CheckConfig) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &CheckConfig {
    &self.config
  }

  pub fn run_checks(&self, task: &Task) -> Vec<Issue> {
    let boxes = task.boxes();
    let image = task.image_size();

    let mut issues = Vec::new();
    for (index, annotation) in boxes.iter().enumerate() {
      issues.extend(check_invalid_label(annotation, index));

      let missing = check_missing_attribute(annotation, index);
      // 属性不全时跳过依赖属性的检查，尺寸检查照常执行
      let attrs_complete = missing.is_empty();
      issues.extend(missing);
      if attrs_complete {
        issues.extend(check_invalid_attr_value(annotation, index));
        issues.extend(check_bg_color_rules(annotation, index));
      }

      issues.extend(check_size(annotation, image, index, &self.config));
    }

    issues.extend(check_duplicates(boxes, &self.config));

    debug!(
      "任务 {} 共 {} 个标注框，发现 {} 个问题",
      task.task_id.as_deref().unwrap_or("<unknown>"),
      boxes.len(),
      issues.len()
    );
    issues
  }
}

impl Inspector for TaskValidator {
  type Input = Task;
  type Output = Vec<Issue>;
  type Error = Infallible;

  fn inspect(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
    Ok(self.run_checks(input))
  }
}
