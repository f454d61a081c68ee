// 该文件是 Shanan QC （山南西风） 项目的一部分。
// src/check/background.rs - 按类别的背景色规则
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

use crate::{
  annotation::{AnnotatedBox, Field},
  issue::{CheckKind, Issue},
  label::{BackgroundColor, Label},
};

/// 背景色与类别不符，最多一条
///
/// 类别非法的框不参与此检查，已由类别检查报告。
pub fn check_bg_color_rules(annotation: &AnnotatedBox, index: usize) -> Vec<Issue> {
  let Some(&label) = annotation.label.valid() else {
    return Vec::new();
  };
  let bg = &annotation.attributes.background_color;
  let is = |color: BackgroundColor| matches!(bg, Field::Valid(c) if *c == color);

  if label == Label::NonVisibleFace && !is(BackgroundColor::NotApplicable) {
    return vec![Issue::error(
      index,
      CheckKind::BgColorMismatch,
      "non_visible_face must have background_color = not_applicable",
    )];
  }

  if label == Label::ConstructionSign && !is(BackgroundColor::Orange) {
    return vec![Issue::warning(
      index,
      CheckKind::BgColorMismatch,
      "construction_sign usually orange",
    )];
  }

  let allowed = label.allowed_backgrounds();
  if !allowed.iter().any(|&c| is(c)) {
    let mut names: Vec<&str> = allowed.iter().map(BackgroundColor::as_str).collect();
    names.sort_unstable();
    return vec![Issue::warning(
      index,
      CheckKind::BgColorMismatch,
      format!("{} usually one of [{}], got {}", label, names.join(", "), bg),
    )];
  }

  Vec::new()
}
