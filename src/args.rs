// 该文件是 Shanan QC （山南西风） 项目的一部分。
// src/args.rs - 命令行参数
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

use clap::Parser;
use url::Url;

use shanan_qc::check::CheckConfig;

/// Shanan QC 参数配置
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
  /// 项目名称（与任务平台上的项目名一致）
  #[arg(long, value_name = "NAME")]
  pub project: String,

  /// 报告输出
  /// 支持格式:
  /// - 文件路径或 file:///path/report.json
  /// - 按日期归档: folder:///path/to/dir
  #[arg(long, default_value = "quality_issues.json", value_name = "OUTPUT")]
  pub out: String,

  /// 最多处理的任务数（0 表示无限制）
  #[arg(long, value_name = "COUNT")]
  pub limit: Option<usize>,

  /// 任务来源
  /// 支持格式:
  /// - 远程接口: scale://api.scale.com/v1
  /// - 本地导出: tasks:///path/to/dump.json
  #[arg(long, default_value = "scale://api.scale.com/v1", value_name = "SOURCE")]
  pub source: Url,

  /// 任务接口密钥
  #[arg(long, env = "SCALE_API_KEY", hide_env_values = true, value_name = "KEY")]
  pub api_key: Option<String>,

  /// 分页大小
  #[arg(long, value_name = "COUNT")]
  pub page_size: Option<usize>,

  /// 过小框阈值（像素）
  #[arg(long, default_value = "4", value_name = "PIXELS")]
  pub min_side: f64,

  /// 过大框面积占比阈值 (0.0 - 1.0)
  #[arg(long, default_value = "0.8", value_name = "RATIO")]
  pub max_area_ratio: f64,

  /// 重复框 IoU 阈值 (0.0 - 1.0)
  #[arg(long, default_value = "0.9", value_name = "THRESHOLD")]
  pub duplicate_iou: f64,
}

impl Args {
  pub fn check_config(&self) -> CheckConfig {
    CheckConfig {
      min_side: self.min_side,
      max_area_ratio: self.max_area_ratio,
      duplicate_iou: self.duplicate_iou,
    }
  }
}
