// 该文件是 Shanan QC （山南西风） 项目的一部分。
// src/input/task_file.rs - 本地任务导出文件输入
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

use std::{fs::File, io::BufReader, path::Path};

use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};
use url::Url;

use crate::{FromUrl, FromUrlWithScheme, annotation::Task};

#[derive(Error, Debug)]
pub enum TaskFileError {
  #[error("URI 方案不匹配")]
  SchemeMismatch,
  #[error("I/O 错误: {0}")]
  IoError(#[from] std::io::Error),
  #[error("任务文件解析错误: {0}")]
  ParseError(#[from] serde_json::Error),
}

/// 导出文件可以是任务数组，也可以是接口返回的单页 `{"docs": [...]}`
#[derive(Deserialize)]
#[serde(untagged)]
enum TaskDump {
  Tasks(Vec<Task>),
  Page { docs: Vec<Task> },
}

/// 从本地 JSON 文件读取任务，地址形如 `tasks:///path/to/dump.json`
pub struct TaskFileInput {
  tasks: std::vec::IntoIter<Task>,
}

impl FromUrlWithScheme for TaskFileInput {
  const SCHEME: &'static str = "tasks";
}

impl FromUrl for TaskFileInput {
  type Error = TaskFileError;

  fn from_url(url: &Url) -> Result<Self, Self::Error> {
    if url.scheme() != Self::SCHEME {
      error!(
        "URI scheme mismatch: expected '{}', found '{}'",
        Self::SCHEME,
        url.scheme()
      );
      return Err(TaskFileError::SchemeMismatch);
    }

    Self::open(url.path())
  }
}

impl TaskFileInput {
  pub fn open(path: impl AsRef<Path>) -> Result<Self, TaskFileError> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let tasks = match serde_json::from_reader(reader)? {
      TaskDump::Tasks(tasks) => tasks,
      TaskDump::Page { docs } => docs,
    };
    info!("从 {} 读取到 {} 个任务", path.display(), tasks.len());

    Ok(Self {
      tasks: tasks.into_iter(),
    })
  }
}

impl Iterator for TaskFileInput {
  type Item = Task;

  fn next(&mut self) -> Option<Self::Item> {
    self.tasks.next()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;

  fn dump(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
  }

  #[test]
  fn reads_task_array() {
    let file = dump(r#"[{"task_id": "a"}, {"task_id": "b"}]"#);
    let url = Url::from_file_path(file.path()).unwrap();
    let url = Url::parse(&format!("tasks://{}", url.path())).unwrap();
    let ids: Vec<_> = TaskFileInput::from_url(&url)
      .unwrap()
      .map(|t| t.task_id.unwrap())
      .collect();
    assert_eq!(ids, vec!["a", "b"]);
  }

  #[test]
  fn reads_page_object() {
    let file = dump(r#"{"docs": [{"task_id": "a", "response": {"annotations": []}}]}"#);
    let tasks: Vec<_> = TaskFileInput::open(file.path()).unwrap().collect();
    assert_eq!(tasks.len(), 1);
  }

  #[test]
  fn rejects_other_schemes() {
    let url = Url::parse("image:///tmp/x.json").unwrap();
    assert!(matches!(
      TaskFileInput::from_url(&url),
      Err(TaskFileError::SchemeMismatch)
    ));
  }

  #[test]
  fn broken_file_is_an_error() {
    let file = dump("{ not json");
    assert!(matches!(
      TaskFileInput::open(file.path()),
      Err(TaskFileError::ParseError(_))
    ));
  }
}
