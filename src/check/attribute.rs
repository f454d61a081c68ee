// 该文件是 Shanan QC （山南西风） 项目的一部分。
// src/check/attribute.rs - 属性完整性与取值检查
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
};

/// 缺少 occlusion / truncation / background_color 中的任意一项
pub fn check_missing_attribute(annotation: &AnnotatedBox, index: usize) -> Vec<Issue> {
  let attrs = &annotation.attributes;
  let missing: Vec<&str> = [
    ("occlusion", attrs.occlusion.is_missing()),
    ("truncation", attrs.truncation.is_missing()),
    ("background_color", attrs.background_color.is_missing()),
  ]
  .into_iter()
  .filter_map(|(key, missing)| missing.then_some(key))
  .collect();

  if missing.is_empty() {
    return Vec::new();
  }

  vec![Issue::error(
    index,
    CheckKind::MissingAttribute,
    missing.join(","),
  )]
}

/// 已给出但取值不在枚举范围内的属性，每项一条
pub fn check_invalid_attr_value(annotation: &AnnotatedBox, index: usize) -> Vec<Issue> {
  let attrs = &annotation.attributes;
  let mut issues = Vec::new();

  if let Field::Invalid(_) = attrs.occlusion {
    issues.push(Issue::error(
      index,
      CheckKind::InvalidOcclusion,
      attrs.occlusion.to_string(),
    ));
  }
  if let Field::Invalid(_) = attrs.truncation {
    issues.push(Issue::error(
      index,
      CheckKind::InvalidTruncation,
      attrs.truncation.to_string(),
    ));
  }
  if let Field::Invalid(_) = attrs.background_color {
    issues.push(Issue::error(
      index,
      CheckKind::InvalidBackgroundColor,
      attrs.background_color.to_string(),
    ));
  }

  issues
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn complete_attributes() {
    let b = AnnotatedBox::from(json!({
      "attributes": { "occlusion": "0%", "truncation": "100%", "background_color": "red" }
    }));
    assert!(check_missing_attribute(&b, 0).is_empty());
    assert!(check_invalid_attr_value(&b, 0).is_empty());
  }

  #[test]
  fn missing_keys_listed_in_fixed_order() {
    let b = AnnotatedBox::from(json!({
      "attributes": { "background_color": "red" }
    }));
    assert_eq!(
      check_missing_attribute(&b, 2),
      vec![Issue::error(2, CheckKind::MissingAttribute, "occlusion,truncation")]
    );

    let none = AnnotatedBox::from(json!({}));
    assert_eq!(
      check_missing_attribute(&none, 0)[0].details,
      "occlusion,truncation,background_color"
    );
  }

  #[test]
  fn null_attribute_is_present_but_invalid() {
    let b = AnnotatedBox::from(json!({
      "attributes": { "occlusion": null, "truncation": "50%", "background_color": "red" }
    }));
    assert!(check_missing_attribute(&b, 0).is_empty());
    assert_eq!(
      check_invalid_attr_value(&b, 0),
      vec![Issue::error(0, CheckKind::InvalidOcclusion, "null")]
    );
  }

  #[test]
  fn one_issue_per_bad_attribute() {
    let b = AnnotatedBox::from(json!({
      "attributes": { "occlusion": "10%", "truncation": "half", "background_color": "purple" }
    }));
    let issues = check_invalid_attr_value(&b, 1);
    let checks: Vec<_> = issues.iter().map(|i| i.check).collect();
    assert_eq!(
      checks,
      vec![
        CheckKind::InvalidOcclusion,
        CheckKind::InvalidTruncation,
        CheckKind::InvalidBackgroundColor
      ]
    );
    assert_eq!(issues[2].details, "purple");
    assert!(issues.iter().all(Issue::is_error));
  }
}
