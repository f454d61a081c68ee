// 该文件是 Shanan QC （山南西风） 项目的一部分。
// src/geometry.rs - 边界框几何计算
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

/// 轴对齐边界框，左上角坐标 + 宽高（像素）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
  /// 左上角 x 坐标
  pub left: f64,
  /// 左上角 y 坐标
  pub top: f64,
  /// 宽度
  pub width: f64,
  /// 高度
  pub height: f64,
}

impl Rect {
  pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
    Self {
      left,
      top,
      width,
      height,
    }
  }

  pub fn right(&self) -> f64 {
    self.left + self.width
  }

  pub fn bottom(&self) -> f64 {
    self.top + self.height
  }

  pub fn area(&self) -> f64 {
    self.width.max(0.0) * self.height.max(0.0)
  }
}

/// 计算两个边界框的 IoU
///
/// 并集面积不为正（零面积框、NaN）时返回 0.0，结果总在 [0, 1] 内。
pub fn intersection_over_union(a: &Rect, b: &Rect) -> f64 {
  let inter_w = (a.right().min(b.right()) - a.left.max(b.left)).max(0.0);
  let inter_h = (a.bottom().min(b.bottom()) - a.top.max(b.top)).max(0.0);
  let intersection = inter_w * inter_h;
  let union = a.area() + b.area() - intersection;

  if union > 0.0 {
    (intersection / union).clamp(0.0, 1.0)
  } else {
    0.0
  }
}
