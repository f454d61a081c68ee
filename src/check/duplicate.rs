// 该文件是 Shanan QC （山南西风） 项目的一部分。
// src/check/duplicate.rs - 重复标注检查
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

use tracing::trace;

use crate::{
  annotation::AnnotatedBox,
  check::CheckConfig,
  geometry::intersection_over_union,
  issue::{CheckKind, Issue, Severity},
};

/// 同类别且 IoU 超过阈值的框对，按 (i, j)，i < j 的顺序输出
///
/// 不同类别的高重叠框不算重复。几何信息畸形的框不参与比较。
pub fn check_duplicates(boxes: &[AnnotatedBox], config: &CheckConfig) -> Vec<Issue> {
  let mut issues = Vec::new();

  for (i, a) in boxes.iter().enumerate() {
    let Some(rect_a) = a.geometry.rect() else {
      continue;
    };
    for (j, b) in boxes.iter().enumerate().skip(i + 1) {
      let Some(rect_b) = b.geometry.rect() else {
        continue;
      };
      if a.label != b.label {
        continue;
      }

      let iou = intersection_over_union(rect_a, rect_b);
      trace!("框 {} 与框 {} 的 IoU: {:.4}", i, j, iou);
      if iou > config.duplicate_iou {
        issues.push(Issue::pair(
          Severity::Warning,
          i,
          j,
          CheckKind::DuplicateBox,
          format!("IoU > {}", config.duplicate_iou),
        ));
      }
    }
  }

  issues
}
