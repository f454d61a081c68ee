// 该文件是 Shanan QC （山南西风） 项目的一部分。
// src/input/scale_api.rs - 远程任务接口输入
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

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error, info};
use url::Url;

use crate::{
  FromUrl, FromUrlWithScheme,
  annotation::Task,
  input::paginate::{Paginated, TaskPages},
};

const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
const HTTP_REQUEST_TIMEOUT_SECS: u64 = 120;
const DEFAULT_PAGE_SIZE: usize = 100;

#[derive(Error, Debug)]
pub enum ScaleApiError {
  #[error("URI 方案不匹配")]
  SchemeMismatch,
  #[error("接口地址无效: {0}")]
  InvalidUrl(String),
  #[error("未设置 API 密钥（--api-key 或 SCALE_API_KEY）")]
  MissingApiKey,
  #[error("未指定项目名称")]
  MissingProject,
  #[error("HTTP 请求错误: {0}")]
  HttpError(#[from] reqwest::Error),
  #[error("接口返回 HTTP {status} - {reason}")]
  StatusError { status: u16, reason: String },
}

/// 接口单页返回
#[derive(Deserialize)]
struct TaskPage {
  #[serde(default)]
  docs: Vec<Task>,
}

/// 已完成任务的分页客户端
pub struct ScaleClient {
  client: Client,
  tasks_url: Url,
  project: String,
  api_key: String,
}

impl ScaleClient {
  pub fn tasks_url(&self) -> &Url {
    &self.tasks_url
  }
}

impl TaskPages for ScaleClient {
  type Error = ScaleApiError;

  fn fetch_page(&mut self, last_id: Option<&str>, limit: usize) -> Result<Vec<Task>, Self::Error> {
    let mut url = self.tasks_url.clone();
    {
      let mut query = url.query_pairs_mut();
      query
        .append_pair("project", &self.project)
        .append_pair("status", "completed")
        .append_pair("limit", &limit.to_string());
      if let Some(last_id) = last_id {
        query.append_pair("last_id", last_id);
      }
    }

    debug!("请求任务页: {}", url);
    let response = self
      .client
      .get(url)
      .basic_auth(&self.api_key, Some(""))
      .send()?;

    let status = response.status();
    if !status.is_success() {
      error!("任务接口返回错误状态: {}", status);
      return Err(ScaleApiError::StatusError {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown error").to_string(),
      });
    }

    let page: TaskPage = response.json()?;
    Ok(page.docs)
  }
}

pub type ScaleTaskStream = Paginated<ScaleClient>;

/// 远程任务接口，地址形如 `scale://api.scale.com/v1`
///
/// 默认使用 HTTPS，带 `plain` 查询参数时使用 HTTP；`page_size` 查询参数设置页大小。
#[derive(Debug, Clone)]
pub struct ScaleApiBuilder {
  base_url: Url,
  page_size: usize,
  project: Option<String>,
  api_key: Option<String>,
}

impl FromUrlWithScheme for ScaleApiBuilder {
  const SCHEME: &'static str = "scale";
}

impl FromUrl for ScaleApiBuilder {
  type Error = ScaleApiError;

  fn from_url(url: &Url) -> Result<Self, Self::Error> {
    if url.scheme() != Self::SCHEME {
      return Err(ScaleApiError::SchemeMismatch);
    }

    let host = url
      .host_str()
      .ok_or_else(|| ScaleApiError::InvalidUrl(url.to_string()))?;
    let plain = url.query_pairs().any(|(k, _)| k == "plain");
    let mut page_size = DEFAULT_PAGE_SIZE;
    for (k, v) in url.query_pairs() {
      if k == "page_size" {
        page_size = v
          .parse()
          .map_err(|_| ScaleApiError::InvalidUrl(url.to_string()))?;
      }
    }

    let base = format!(
      "{}://{}{}{}",
      if plain { "http" } else { "https" },
      host,
      url.port().map(|p| format!(":{p}")).unwrap_or_default(),
      url.path()
    );
    let base_url = Url::parse(&base).map_err(|e| ScaleApiError::InvalidUrl(e.to_string()))?;

    Ok(ScaleApiBuilder {
      base_url,
      page_size,
      project: None,
      api_key: None,
    })
  }
}

impl ScaleApiBuilder {
  pub fn project(mut self, project: impl Into<String>) -> Self {
    self.project = Some(project.into());
    self
  }

  pub fn api_key(mut self, api_key: Option<String>) -> Self {
    self.api_key = api_key;
    self
  }

  pub fn page_size(mut self, page_size: usize) -> Self {
    self.page_size = page_size;
    self
  }

  pub fn base_url(&self) -> &Url {
    &self.base_url
  }

  fn tasks_url(&self) -> Result<Url, ScaleApiError> {
    let mut url = self.base_url.clone();
    url
      .path_segments_mut()
      .map_err(|_| ScaleApiError::InvalidUrl(self.base_url.to_string()))?
      .pop_if_empty()
      .push("tasks");
    Ok(url)
  }

  pub fn build(self) -> Result<ScaleTaskStream, ScaleApiError> {
    let project = self
      .project
      .clone()
      .filter(|p| !p.is_empty())
      .ok_or(ScaleApiError::MissingProject)?;
    let api_key = self
      .api_key
      .clone()
      .filter(|k| !k.is_empty())
      .ok_or(ScaleApiError::MissingApiKey)?;
    let tasks_url = self.tasks_url()?;

    let client = Client::builder()
      .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
      .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
      .user_agent(concat!("shanan-qc/", env!("CARGO_PKG_VERSION")))
      .build()?;

    info!(
      "任务接口: {}，项目: {}，页大小: {}",
      tasks_url, project, self.page_size
    );

    Ok(Paginated::new(
      ScaleClient {
        client,
        tasks_url,
        project,
        api_key,
      },
      self.page_size,
    ))
  }
}
