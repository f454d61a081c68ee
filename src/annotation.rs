// 该文件是 Shanan QC （山南西风） 项目的一部分。
// src/annotation.rs - 标注任务数据模型
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

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::{
  geometry::Rect,
  label::{BackgroundColor, Coverage, Label},
};

/// 标注字段的三种状态：合法取值、非法取值、缺失
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
  Valid(T),
  /// 原始 JSON 值（包括 null）
  Invalid(Value),
  Missing,
}

impl<T: DeserializeOwned> Field<T> {
  pub fn from_lookup(value: Option<&Value>) -> Self {
    match value {
      None => Field::Missing,
      Some(raw) => match T::deserialize(raw) {
        Ok(parsed) => Field::Valid(parsed),
        Err(_) => Field::Invalid(raw.clone()),
      },
    }
  }
}

impl<T> Field<T> {
  pub fn valid(&self) -> Option<&T> {
    match self {
      Field::Valid(v) => Some(v),
      _ => None,
    }
  }

  pub fn is_missing(&self) -> bool {
    matches!(self, Field::Missing)
  }
}

impl<T: fmt::Display> fmt::Display for Field<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Field::Valid(v) => fmt::Display::fmt(v, f),
      Field::Invalid(Value::String(s)) => f.write_str(s),
      Field::Invalid(raw) => fmt::Display::fmt(raw, f),
      Field::Missing => f.write_str("null"),
    }
  }
}

/// 边界框几何信息
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
  Valid(Rect),
  /// 缺失或非数值的字段，按 left, top, width, height 顺序
  Malformed(Vec<&'static str>),
}

const GEOMETRY_KEYS: [&str; 4] = ["left", "top", "width", "height"];

impl Geometry {
  fn from_object(obj: &Map<String, Value>) -> Self {
    // 优先使用嵌套的 geometry 对象，否则读取平铺字段
    let source = match obj.get("geometry") {
      Some(Value::Object(nested)) => nested,
      _ => obj,
    };

    let values = GEOMETRY_KEYS.map(|key| source.get(key).and_then(Value::as_f64));
    let malformed: Vec<&'static str> = GEOMETRY_KEYS
      .iter()
      .zip(values.iter())
      .filter(|(_, v)| v.is_none())
      .map(|(k, _)| *k)
      .collect();

    match values {
      [Some(left), Some(top), Some(width), Some(height)] => {
        Geometry::Valid(Rect::new(left, top, width, height))
      }
      _ => Geometry::Malformed(malformed),
    }
  }

  pub fn rect(&self) -> Option<&Rect> {
    match self {
      Geometry::Valid(rect) => Some(rect),
      Geometry::Malformed(_) => None,
    }
  }
}

/// 标注属性
#[derive(Debug, Clone, PartialEq)]
pub struct Attributes {
  pub occlusion: Field<Coverage>,
  pub truncation: Field<Coverage>,
  pub background_color: Field<BackgroundColor>,
}

impl Attributes {
  fn from_value(value: Option<&Value>) -> Self {
    let obj = value.and_then(Value::as_object);
    let lookup = |key: &str| obj.and_then(|o| o.get(key));
    Self {
      occlusion: Field::from_lookup(lookup("occlusion")),
      truncation: Field::from_lookup(lookup("truncation")),
      background_color: Field::from_lookup(lookup("background_color")),
    }
  }
}

/// 单个标注框
///
/// 从任意 JSON 值解码且不会失败，畸形字段以 [`Field`] / [`Geometry`] 的形式保留，
/// 交由各项检查报告。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct AnnotatedBox {
  pub label: Field<Label>,
  pub geometry: Geometry,
  pub attributes: Attributes,
}

impl From<Value> for AnnotatedBox {
  fn from(value: Value) -> Self {
    AnnotatedBox::from(&value)
  }
}

impl From<&Value> for AnnotatedBox {
  fn from(value: &Value) -> Self {
    let empty = Map::new();
    let obj = value.as_object().unwrap_or(&empty);
    Self {
      label: Field::from_lookup(obj.get("label")),
      geometry: Geometry::from_object(obj),
      attributes: Attributes::from_value(obj.get("attributes")),
    }
  }
}

/// 图像尺寸（像素）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageSize {
  pub width: f64,
  pub height: f64,
}

impl ImageSize {
  pub fn area(&self) -> f64 {
    self.width * self.height
  }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Value::deserialize(deserializer)?.as_f64())
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AttachmentMetadata {
  #[serde(default, deserialize_with = "lenient_number")]
  pub width: Option<f64>,
  #[serde(default, deserialize_with = "lenient_number")]
  pub height: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TaskParams {
  /// 原始图像地址
  #[serde(default)]
  pub attachment: Option<String>,
  #[serde(default)]
  pub attachment_metadata: Option<AttachmentMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TaskResponse {
  #[serde(default)]
  pub annotations: Vec<AnnotatedBox>,
}

/// 标注流水线中的一个任务
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Task {
  #[serde(default)]
  pub task_id: Option<String>,
  #[serde(default)]
  pub params: Option<TaskParams>,
  #[serde(default)]
  pub response: Option<TaskResponse>,
}

impl Task {
  pub fn boxes(&self) -> &[AnnotatedBox] {
    self
      .response
      .as_ref()
      .map(|r| r.annotations.as_slice())
      .unwrap_or(&[])
  }

  pub fn image_url(&self) -> Option<&str> {
    self.params.as_ref()?.attachment.as_deref()
  }

  /// 图像尺寸，缺失、非数值或为零时返回 None
  pub fn image_size(&self) -> Option<ImageSize> {
    let meta = self.params.as_ref()?.attachment_metadata.as_ref()?;
    match (meta.width, meta.height) {
      (Some(width), Some(height)) if width > 0.0 && height > 0.0 => {
        Some(ImageSize { width, height })
      }
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn well_formed_box() {
    let b = AnnotatedBox::from(json!({
      "label": "policy_sign",
      "left": 10, "top": 20, "width": 30.5, "height": 40,
      "attributes": {
        "occlusion": "0%",
        "truncation": "25%",
        "background_color": "blue"
      }
    }));
    assert_eq!(b.label, Field::Valid(Label::PolicySign));
    assert_eq!(b.geometry, Geometry::Valid(Rect::new(10.0, 20.0, 30.5, 40.0)));
    assert_eq!(b.attributes.occlusion, Field::Valid(Coverage::None));
    assert_eq!(b.attributes.truncation, Field::Valid(Coverage::Quarter));
    assert_eq!(
      b.attributes.background_color,
      Field::Valid(BackgroundColor::Blue)
    );
  }

  #[test]
  fn nested_geometry_object() {
    let b = AnnotatedBox::from(json!({
      "label": "policy_sign",
      "geometry": { "left": 1, "top": 2, "width": 3, "height": 4 }
    }));
    assert_eq!(b.geometry, Geometry::Valid(Rect::new(1.0, 2.0, 3.0, 4.0)));
  }

  #[test]
  fn three_way_field_state() {
    let b = AnnotatedBox::from(json!({
      "label": null,
      "attributes": { "occlusion": "13%", "truncation": 50 }
    }));
    assert_eq!(b.label, Field::Invalid(Value::Null));
    assert_eq!(b.attributes.occlusion, Field::Invalid(json!("13%")));
    assert_eq!(b.attributes.truncation, Field::Invalid(json!(50)));
    assert!(b.attributes.background_color.is_missing());
    assert_eq!(
      b.geometry,
      Geometry::Malformed(vec!["left", "top", "width", "height"])
    );
  }

  #[test]
  fn non_object_box_is_all_missing() {
    let b = AnnotatedBox::from(json!("garbage"));
    assert!(b.label.is_missing());
    assert!(b.attributes.occlusion.is_missing());
    assert!(b.geometry.rect().is_none());
  }

  #[test]
  fn field_display() {
    assert_eq!(Field::Valid(Label::PolicySign).to_string(), "policy_sign");
    assert_eq!(Field::<Label>::Invalid(json!("bogus_label")).to_string(), "bogus_label");
    assert_eq!(Field::<Label>::Invalid(json!(7)).to_string(), "7");
    assert_eq!(Field::<Label>::Invalid(Value::Null).to_string(), "null");
    assert_eq!(Field::<Label>::Missing.to_string(), "null");
  }

  #[test]
  fn task_decoding() {
    let task: Task = serde_json::from_value(json!({
      "task_id": "t-1",
      "params": {
        "attachment": "https://example.com/a.jpg",
        "attachment_metadata": { "width": 1920, "height": "1080" }
      },
      "response": { "annotations": [ { "label": "policy_sign" }, 42 ] }
    }))
    .unwrap();
    assert_eq!(task.task_id.as_deref(), Some("t-1"));
    assert_eq!(task.image_url(), Some("https://example.com/a.jpg"));
    assert_eq!(task.boxes().len(), 2);
    // 非数值高度视为缺失
    assert_eq!(task.image_size(), None);
  }

  #[test]
  fn task_without_response_has_no_boxes() {
    let task: Task = serde_json::from_value(json!({ "task_id": "t-2", "response": null })).unwrap();
    assert!(task.boxes().is_empty());
    assert_eq!(task.image_size(), None);
    assert_eq!(task.image_url(), None);
  }
}
