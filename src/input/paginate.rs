// 该文件是 Shanan QC （山南西风） 项目的一部分。
// src/input/paginate.rs - 基于游标的分页任务流
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

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::annotation::Task;

/// 按页拉取任务
pub trait TaskPages {
  type Error;

  /// 拉取 `last_id` 之后的至多 `limit` 个任务，首页时 `last_id` 为 None
  fn fetch_page(&mut self, last_id: Option<&str>, limit: usize) -> Result<Vec<Task>, Self::Error>;
}

/// 惰性分页迭代器
///
/// 返回的任务数少于页大小时结束。拉取失败时产出一次错误后结束，不会跳过任何一页。
pub struct Paginated<P> {
  pages: P,
  page_size: usize,
  last_id: Option<String>,
  buffer: VecDeque<Task>,
  exhausted: bool,
  page_count: usize,
}

impl<P: TaskPages> Paginated<P> {
  pub fn new(pages: P, page_size: usize) -> Self {
    Self {
      pages,
      page_size: page_size.max(1),
      last_id: None,
      buffer: VecDeque::new(),
      exhausted: false,
      page_count: 0,
    }
  }

  pub fn page_size(&self) -> usize {
    self.page_size
  }

  /// 丢弃游标，从第一页重新开始
  pub fn restart(&mut self) {
    self.last_id = None;
    self.buffer.clear();
    self.exhausted = false;
    self.page_count = 0;
  }

  fn fetch_next_page(&mut self) -> Result<(), P::Error> {
    let docs = self
      .pages
      .fetch_page(self.last_id.as_deref(), self.page_size)?;
    self.page_count += 1;
    debug!("第 {} 页: {} 个任务", self.page_count, docs.len());

    if docs.len() < self.page_size {
      self.exhausted = true;
    } else {
      match docs.last().and_then(|task| task.task_id.clone()) {
        Some(last_id) => self.last_id = Some(last_id),
        None => {
          warn!("第 {} 页最后一个任务没有 task_id，无法继续分页", self.page_count);
          self.exhausted = true;
        }
      }
    }

    self.buffer.extend(docs);
    Ok(())
  }
}

impl<P: TaskPages> Iterator for Paginated<P> {
  type Item = Result<Task, P::Error>;

  fn next(&mut self) -> Option<Self::Item> {
    loop {
      if let Some(task) = self.buffer.pop_front() {
        return Some(Ok(task));
      }
      if self.exhausted {
        return None;
      }
      if let Err(e) = self.fetch_next_page() {
        self.exhausted = true;
        return Some(Err(e));
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// 内存中的任务库，记录每次请求的游标
  struct FakePages {
    ids: Vec<String>,
    requests: Vec<(Option<String>, usize)>,
    fail_on_request: Option<usize>,
  }

  impl FakePages {
    fn with_tasks(n: usize) -> Self {
      Self {
        ids: (0..n).map(|i| format!("t{i}")).collect(),
        requests: Vec::new(),
        fail_on_request: None,
      }
    }
  }

  impl TaskPages for &mut FakePages {
    type Error = String;

    fn fetch_page(&mut self, last_id: Option<&str>, limit: usize) -> Result<Vec<Task>, String> {
      self.requests.push((last_id.map(str::to_owned), limit));
      if self.fail_on_request == Some(self.requests.len()) {
        return Err("HTTP 500".to_string());
      }
      let start = match last_id {
        None => 0,
        Some(id) => self.ids.iter().position(|x| x == id).unwrap() + 1,
      };
      Ok(
        self.ids[start..]
          .iter()
          .take(limit)
          .map(|id| Task {
            task_id: Some(id.clone()),
            ..Task::default()
          })
          .collect(),
      )
    }
  }

  fn ids(results: Vec<Result<Task, String>>) -> Vec<String> {
    results
      .into_iter()
      .map(|r| r.unwrap().task_id.unwrap())
      .collect()
  }

  #[test]
  fn stops_on_short_page_and_passes_cursor() {
    let mut fake = FakePages::with_tasks(5);
    let got = ids(Paginated::new(&mut fake, 2).collect());
    assert_eq!(got, vec!["t0", "t1", "t2", "t3", "t4"]);
    assert_eq!(
      fake.requests,
      vec![
        (None, 2),
        (Some("t1".to_string()), 2),
        (Some("t3".to_string()), 2),
      ]
    );
  }

  #[test]
  fn exact_multiple_needs_one_empty_page() {
    let mut fake = FakePages::with_tasks(4);
    let got = ids(Paginated::new(&mut fake, 2).collect());
    assert_eq!(got.len(), 4);
    assert_eq!(fake.requests.len(), 3);
  }

  #[test]
  fn is_lazy() {
    let mut fake = FakePages::with_tasks(10);
    let got = ids(Paginated::new(&mut fake, 3).take(2).collect());
    assert_eq!(got, vec!["t0", "t1"]);
    assert_eq!(fake.requests.len(), 1);
  }

  #[test]
  fn failure_is_surfaced_once_then_ends() {
    let mut fake = FakePages::with_tasks(10);
    fake.fail_on_request = Some(2);
    let results: Vec<_> = Paginated::new(&mut fake, 3).collect();
    assert_eq!(results.len(), 4);
    assert!(results[..3].iter().all(Result::is_ok));
    assert_eq!(results[3], Err("HTTP 500".to_string()));
  }

  #[test]
  fn restart_begins_from_first_page() {
    let mut fake = FakePages::with_tasks(3);
    let mut stream = Paginated::new(&mut fake, 2);
    assert_eq!(stream.next().unwrap().unwrap().task_id.as_deref(), Some("t0"));
    assert_eq!(stream.next().unwrap().unwrap().task_id.as_deref(), Some("t1"));
    stream.restart();
    let got = ids(stream.collect());
    assert_eq!(got, vec!["t0", "t1", "t2"]);
  }

  #[test]
  fn zero_page_size_is_clamped() {
    let mut fake = FakePages::with_tasks(2);
    let stream = Paginated::new(&mut fake, 0);
    assert_eq!(stream.page_size(), 1);
    assert_eq!(ids(stream.collect()).len(), 2);
  }
}
