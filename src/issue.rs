// 该文件是 Shanan QC （山南西风） 项目的一部分。
// src/issue.rs - 质检问题记录
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

use std::fmt;

use serde::Serialize;

/// 问题严重程度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
  /// 违反标注规范，应阻止验收
  Error,
  /// 统计或风格上的异常
  Warning,
}

/// 触发问题的检查项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
  InvalidLabel,
  MissingAttribute,
  InvalidOcclusion,
  InvalidTruncation,
  InvalidBackgroundColor,
  BgColorMismatch,
  TinyBox,
  OversizedBox,
  InvalidGeometry,
  DuplicateBox,
}

impl CheckKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      CheckKind::InvalidLabel => "invalid_label",
      CheckKind::MissingAttribute => "missing_attribute",
      CheckKind::InvalidOcclusion => "invalid_occlusion",
      CheckKind::InvalidTruncation => "invalid_truncation",
      CheckKind::InvalidBackgroundColor => "invalid_background_color",
      CheckKind::BgColorMismatch => "bg_color_mismatch",
      CheckKind::TinyBox => "tiny_box",
      CheckKind::OversizedBox => "oversized_box",
      CheckKind::InvalidGeometry => "invalid_geometry",
      CheckKind::DuplicateBox => "duplicate_box",
    }
  }
}

impl fmt::Display for CheckKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// 问题所指向的标注框（任务内的序号）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum IssueTarget {
  Single { box_id: usize },
  Pair { box_id_1: usize, box_id_2: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
  pub severity: Severity,
  #[serde(flatten)]
  pub target: IssueTarget,
  pub check: CheckKind,
  pub details: String,
}

impl Issue {
  pub fn error(box_id: usize, check: CheckKind, details: impl Into<String>) -> Self {
    Self::single(Severity::Error, box_id, check, details)
  }

  pub fn warning(box_id: usize, check: CheckKind, details: impl Into<String>) -> Self {
    Self::single(Severity::Warning, box_id, check, details)
  }

  pub fn pair(
    severity: Severity,
    box_id_1: usize,
    box_id_2: usize,
    check: CheckKind,
    details: impl Into<String>,
  ) -> Self {
    Self {
      severity,
      target: IssueTarget::Pair { box_id_1, box_id_2 },
      check,
      details: details.into(),
    }
  }

  fn single(severity: Severity, box_id: usize, check: CheckKind, details: impl Into<String>) -> Self {
    Self {
      severity,
      target: IssueTarget::Single { box_id },
      check,
      details: details.into(),
    }
  }

  pub fn is_error(&self) -> bool {
    self.severity == Severity::Error
  }

  pub fn is_warning(&self) -> bool {
    self.severity == Severity::Warning
  }
}
