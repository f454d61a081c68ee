// 该文件是 Shanan QC （山南西风） 项目的一部分。
// src/output/json_report.rs - JSON 报告文件输出
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

use std::{
  ffi::OsString,
  fs::File,
  io::{BufWriter, Write},
  path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::{
  FromUrl, FromUrlWithScheme,
  annotation::Task,
  issue::Issue,
  output::Render,
  report::ReportEntry,
};

#[derive(Error, Debug)]
pub enum JsonReportError {
  #[error("URI 方案不匹配")]
  SchemeMismatch,
  #[error("无效的文件路径: {0}")]
  InvalidPath(String),
  #[error("I/O 错误: {0}")]
  IoError(#[from] std::io::Error),
  #[error("序列化错误: {0}")]
  SerializeError(#[from] serde_json::Error),
}

/// 以 JSON 数组形式写出报告
///
/// 写入过程中内容位于 `<path>.partial`，`finish` 成功后才改名为目标文件，
/// 中途失败时目标文件保持不变。
pub struct JsonReportOutput {
  path: PathBuf,
  partial_path: PathBuf,
  writer: BufWriter<File>,
  entries: usize,
}

impl FromUrlWithScheme for JsonReportOutput {
  const SCHEME: &'static str = "file";
}

impl FromUrl for JsonReportOutput {
  type Error = JsonReportError;

  fn from_url(url: &Url) -> Result<Self, Self::Error> {
    if url.scheme() != Self::SCHEME {
      return Err(JsonReportError::SchemeMismatch);
    }
    let path = url
      .to_file_path()
      .map_err(|_| JsonReportError::InvalidPath(url.to_string()))?;
    Self::create(path)
  }
}

fn partial_path_of(path: &Path) -> PathBuf {
  let mut name: OsString = path.as_os_str().to_owned();
  name.push(".partial");
  PathBuf::from(name)
}

impl JsonReportOutput {
  pub fn create(path: impl Into<PathBuf>) -> Result<Self, JsonReportError> {
    let path = path.into();
    let partial_path = partial_path_of(&path);
    debug!("创建临时报告文件: {}", partial_path.display());

    let mut writer = BufWriter::new(File::create(&partial_path)?);
    writer.write_all(b"[")?;

    Ok(Self {
      path,
      partial_path,
      writer,
      entries: 0,
    })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn partial_path(&self) -> &Path {
    &self.partial_path
  }

  /// 已写入的条目数
  pub fn entries(&self) -> usize {
    self.entries
  }

  pub fn write_entry(&mut self, entry: &ReportEntry) -> Result<(), JsonReportError> {
    let separator: &[u8] = if self.entries == 0 { b"\n" } else { b",\n" };
    self.writer.write_all(separator)?;
    serde_json::to_writer_pretty(&mut self.writer, entry)?;
    self.entries += 1;
    Ok(())
  }
}

impl Render<Task, Vec<Issue>> for JsonReportOutput {
  type Error = JsonReportError;

  fn render_result(&mut self, task: &Task, result: Vec<Issue>) -> Result<(), Self::Error> {
    match ReportEntry::new(task, result) {
      Some(entry) => self.write_entry(&entry),
      None => Ok(()),
    }
  }

  fn finish(mut self) -> Result<PathBuf, Self::Error> {
    let closer: &[u8] = if self.entries == 0 { b"]\n" } else { b"\n]\n" };
    self.writer.write_all(closer)?;
    let file = self.writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    drop(file);

    std::fs::rename(&self.partial_path, &self.path)?;
    info!("报告已写入: {} ({} 条)", self.path.display(), self.entries);
    Ok(self.path)
  }
}
