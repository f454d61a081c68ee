// 该文件是 Shanan QC （山南西风） 项目的一部分。
// src/check.rs - 标注质检规则
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

/// 对输入做一次分析，产出结果
pub trait Inspector {
  type Input;
  type Output;
  type Error;

  fn inspect(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// 质检阈值
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckConfig {
  /// 宽或高小于该值（像素）视为过小框
  pub min_side: f64,
  /// 框面积占图像面积超过该比例视为过大框
  pub max_area_ratio: f64,
  /// 同类别两框 IoU 超过该值视为重复标注
  pub duplicate_iou: f64,
}

impl Default for CheckConfig {
  fn default() -> Self {
    Self {
      min_side: 4.0,
      max_area_ratio: 0.80,
      duplicate_iou: 0.9,
    }
  }
}

mod attribute;
mod background;
mod duplicate;
mod label;
mod size;
mod validator;

pub use self::attribute::{check_invalid_attr_value, check_missing_attribute};
pub use self::background::check_bg_color_rules;
pub use self::duplicate::check_duplicates;
pub use self::label::check_invalid_label;
pub use self::size::check_size;
pub use self::validator::TaskValidator;
