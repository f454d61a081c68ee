// 该文件是 Shanan QC （山南西风） 项目的一部分。
// src/check/size.rs - 边界框尺寸检查
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
  annotation::{AnnotatedBox, Geometry, ImageSize},
  check::CheckConfig,
  issue::{CheckKind, Issue},
};

/// 过小框与过大框，两项独立判断
///
/// 几何信息畸形时只报告一条 `invalid_geometry`。
pub fn check_size(
  annotation: &AnnotatedBox,
  image: Option<ImageSize>,
  index: usize,
  config: &CheckConfig,
) -> Vec<Issue> {
  let rect = match &annotation.geometry {
    Geometry::Valid(rect) => rect,
    Geometry::Malformed(keys) => {
      return vec![Issue::error(
        index,
        CheckKind::InvalidGeometry,
        keys.join(","),
      )];
    }
  };

  let mut issues = Vec::new();

  if rect.width < config.min_side || rect.height < config.min_side {
    issues.push(Issue::warning(
      index,
      CheckKind::TinyBox,
      format!("{}x{} px", rect.width, rect.height),
    ));
  }

  if let Some(image) = image {
    if rect.width * rect.height / image.area() > config.max_area_ratio {
      issues.push(Issue::error(
        index,
        CheckKind::OversizedBox,
        format!(
          "covers >{:.0} percent of image",
          config.max_area_ratio * 100.0
        ),
      ));
    }
  }

  issues
}
