// 该文件是 Shanan QC （山南西风） 项目的一部分。
// src/output.rs - 报告输出定义
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

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

use crate::{FromUrl, FromUrlWithScheme, annotation::Task, issue::Issue};

pub trait Render<Input, Output>: Sized {
  type Error;
  fn render_result(&mut self, input: &Input, result: Output) -> Result<(), Self::Error>;

  /// 完成输出，返回最终写入的路径
  fn finish(self) -> Result<PathBuf, Self::Error>;
}

mod json_report;
pub use self::json_report::{JsonReportError, JsonReportOutput};

#[cfg(feature = "directory_record")]
mod directory_record;
#[cfg(feature = "directory_record")]
pub use self::directory_record::{DirectoryRecordOutput, DirectoryRecordOutputError};

#[derive(Error, Debug)]
pub enum OutputError {
  #[error("JSON 报告错误: {0}")]
  JsonReportError(#[from] JsonReportError),
  #[cfg(feature = "directory_record")]
  #[error("目录记录输出错误: {0}")]
  DirectoryRecordOutputError(#[from] DirectoryRecordOutputError),
  #[error("URI 方案不匹配")]
  SchemeMismatch,
}

pub enum OutputWrapper {
  JsonReportOutput(JsonReportOutput),
  #[cfg(feature = "directory_record")]
  DirectoryRecordOutput(DirectoryRecordOutput),
}

impl FromUrl for OutputWrapper {
  type Error = OutputError;

  fn from_url(url: &Url) -> Result<Self, Self::Error> {
    match url.scheme() {
      JsonReportOutput::SCHEME => {
        let output = JsonReportOutput::from_url(url)?;
        Ok(OutputWrapper::JsonReportOutput(output))
      }
      #[cfg(feature = "directory_record")]
      DirectoryRecordOutput::SCHEME => {
        let output = DirectoryRecordOutput::from_url(url)?;
        Ok(OutputWrapper::DirectoryRecordOutput(output))
      }
      _ => Err(OutputError::SchemeMismatch),
    }
  }
}

impl OutputWrapper {
  /// 接受 URL 或普通文件路径，无法解析为绝对 URL 的按文件路径处理
  pub fn open(target: &str) -> Result<Self, OutputError> {
    match Url::parse(target) {
      Ok(url) => Self::from_url(&url),
      Err(_) => Ok(OutputWrapper::JsonReportOutput(JsonReportOutput::create(
        target,
      )?)),
    }
  }
}

impl Render<Task, Vec<Issue>> for OutputWrapper {
  type Error = OutputError;

  fn render_result(&mut self, task: &Task, result: Vec<Issue>) -> Result<(), Self::Error> {
    match self {
      OutputWrapper::JsonReportOutput(output) => output
        .render_result(task, result)
        .map_err(OutputError::from),
      #[cfg(feature = "directory_record")]
      OutputWrapper::DirectoryRecordOutput(output) => output
        .render_result(task, result)
        .map_err(OutputError::from),
    }
  }

  fn finish(self) -> Result<PathBuf, Self::Error> {
    match self {
      OutputWrapper::JsonReportOutput(output) => output.finish().map_err(OutputError::from),
      #[cfg(feature = "directory_record")]
      OutputWrapper::DirectoryRecordOutput(output) => output.finish().map_err(OutputError::from),
    }
  }
}
