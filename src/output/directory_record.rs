// 该文件是 Shanan QC （山南西风） 项目的一部分。
// src/output/directory_record.rs - 按日期归档的报告目录输出
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

use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, Utc};
use thiserror::Error;
use tracing::debug;

use crate::{
  FromUrl, FromUrlWithScheme,
  annotation::Task,
  issue::Issue,
  output::{JsonReportError, JsonReportOutput, Render},
};

#[derive(Error, Debug)]
pub enum DirectoryRecordOutputError {
  #[error("URI 方案不匹配")]
  SchemeMismatch,
  #[error("I/O 错误: {0}")]
  IoError(#[from] std::io::Error),
  #[error("报告写入错误: {0}")]
  JsonReportError(#[from] JsonReportError),
}

/// 报告写入 `<目录>/YYYY/MM/DD/HH-MM-SS.json`（UTC）
pub struct DirectoryRecordOutput {
  report: JsonReportOutput,
}

impl FromUrlWithScheme for DirectoryRecordOutput {
  const SCHEME: &'static str = "folder";
}

impl FromUrl for DirectoryRecordOutput {
  type Error = DirectoryRecordOutputError;

  fn from_url(uri: &url::Url) -> Result<Self, Self::Error> {
    if uri.scheme() != Self::SCHEME {
      return Err(DirectoryRecordOutputError::SchemeMismatch);
    }

    Self::create_at(Path::new(uri.path()), Utc::now())
  }
}

fn record_path(directory: &Path, now: DateTime<Utc>) -> PathBuf {
  directory
    .join(now.year().to_string())
    .join(format!("{:02}", now.month()))
    .join(format!("{:02}", now.day()))
    .join(format!("{}.json", now.format("%H-%M-%S")))
}

impl DirectoryRecordOutput {
  pub fn create_at(directory: &Path, now: DateTime<Utc>) -> Result<Self, DirectoryRecordOutputError> {
    let path = record_path(directory, now);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    debug!("报告归档路径: {}", path.display());

    Ok(DirectoryRecordOutput {
      report: JsonReportOutput::create(path)?,
    })
  }

  pub fn path(&self) -> &Path {
    self.report.path()
  }
}

impl Render<Task, Vec<Issue>> for DirectoryRecordOutput {
  type Error = DirectoryRecordOutputError;

  fn render_result(&mut self, task: &Task, result: Vec<Issue>) -> Result<(), Self::Error> {
    Ok(self.report.render_result(task, result)?)
  }

  fn finish(self) -> Result<PathBuf, Self::Error> {
    Ok(self.report.finish()?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  #[test]
  fn dated_layout() {
    let dir = tempfile::tempdir().unwrap();
    let now = Utc.with_ymd_and_hms(2026, 3, 7, 9, 5, 2).unwrap();
    let output = DirectoryRecordOutput::create_at(dir.path(), now).unwrap();
    let expected = dir.path().join("2026").join("03").join("07").join("09-05-02.json");
    assert_eq!(output.path(), expected.as_path());

    let written = output.finish().unwrap();
    assert_eq!(written, expected);
    assert_eq!(std::fs::read_to_string(&expected).unwrap(), "[]\n");
  }

  #[test]
  fn rejects_other_schemes() {
    let url = url::Url::parse("file:///tmp/report.json").unwrap();
    assert!(matches!(
      DirectoryRecordOutput::from_url(&url),
      Err(DirectoryRecordOutputError::SchemeMismatch)
    ));
  }
}
