// 该文件是 Shanan QC （山南西风） 项目的一部分。
// src/label.rs - 标注规范中的类别与属性取值
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

use serde::{Deserialize, Serialize};

/// 标志牌类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
  ConstructionSign,
  TrafficControlSign,
  InformationSign,
  PolicySign,
  NonVisibleFace,
}

impl Label {
  pub const ALL: [Label; 5] = [
    Label::ConstructionSign,
    Label::TrafficControlSign,
    Label::InformationSign,
    Label::PolicySign,
    Label::NonVisibleFace,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Label::ConstructionSign => "construction_sign",
      Label::TrafficControlSign => "traffic_control_sign",
      Label::InformationSign => "information_sign",
      Label::PolicySign => "policy_sign",
      Label::NonVisibleFace => "non_visible_face",
    }
  }

  /// 该类别常见的背景色（参照 MUTCD，存在例外）
  pub fn allowed_backgrounds(&self) -> &'static [BackgroundColor] {
    use BackgroundColor::*;
    match self {
      // 施工区
      Label::ConstructionSign => &[Orange],
      // 停车/让行/禁令/警告
      Label::TrafficControlSign => &[Red, White, Yellow],
      // 指路/服务设施
      Label::InformationSign => &[Green, Blue, White],
      // 停车、自行车道等
      Label::PolicySign => &[White, Blue, Yellow],
      // 标志背面或侧边
      Label::NonVisibleFace => &[NotApplicable],
    }
  }
}

impl fmt::Display for Label {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// 遮挡/截断比例分档
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coverage {
  #[serde(rename = "0%")]
  None,
  #[serde(rename = "25%")]
  Quarter,
  #[serde(rename = "50%")]
  Half,
  #[serde(rename = "75%")]
  ThreeQuarters,
  #[serde(rename = "100%")]
  Full,
}

impl Coverage {
  pub fn as_str(&self) -> &'static str {
    match self {
      Coverage::None => "0%",
      Coverage::Quarter => "25%",
      Coverage::Half => "50%",
      Coverage::ThreeQuarters => "75%",
      Coverage::Full => "100%",
    }
  }
}

impl fmt::Display for Coverage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// 标志牌背景色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundColor {
  White,
  Yellow,
  Red,
  Orange,
  Green,
  Blue,
  Other,
  NotApplicable,
}

impl BackgroundColor {
  pub fn as_str(&self) -> &'static str {
    match self {
      BackgroundColor::White => "white",
      BackgroundColor::Yellow => "yellow",
      BackgroundColor::Red => "red",
      BackgroundColor::Orange => "orange",
      BackgroundColor::Green => "green",
      BackgroundColor::Blue => "blue",
      BackgroundColor::Other => "other",
      BackgroundColor::NotApplicable => "not_applicable",
    }
  }
}

impl fmt::Display for BackgroundColor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
