// 该文件是 Shanan QC （山南西风） 项目的一部分。
// src/input.rs - 任务输入
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

use thiserror::Error;
use url::Url;

use crate::{FromUrl, FromUrlWithScheme, annotation::Task};

mod paginate;
pub use self::paginate::{Paginated, TaskPages};

mod task_file;
pub use self::task_file::{TaskFileError, TaskFileInput};

#[cfg(feature = "scale_input")]
mod scale_api;
#[cfg(feature = "scale_input")]
pub use self::scale_api::{ScaleApiBuilder, ScaleApiError, ScaleClient, ScaleTaskStream};

#[derive(Error, Debug)]
pub enum InputError {
  #[cfg(feature = "scale_input")]
  #[error("任务接口错误: {0}")]
  ScaleApiError(#[from] ScaleApiError),
  #[error("任务文件错误: {0}")]
  TaskFileError(#[from] TaskFileError),
  #[error("URI 方案不匹配")]
  SchemeMismatch,
}

/// 输入源的运行参数，不适用的输入源会忽略
#[derive(Debug, Clone, Default)]
pub struct SourceOptions {
  /// 项目名称
  pub project: String,
  /// 覆盖地址中的页大小
  pub page_size: Option<usize>,
  /// 接口密钥
  pub api_key: Option<String>,
}

pub enum InputWrapper {
  #[cfg(feature = "scale_input")]
  ScaleApi(ScaleTaskStream),
  TaskFile(TaskFileInput),
}

impl InputWrapper {
  #[cfg_attr(not(feature = "scale_input"), allow(unused_variables))]
  pub fn open(url: &Url, options: &SourceOptions) -> Result<Self, InputError> {
    #[cfg(feature = "scale_input")]
    {
      if url.scheme() == ScaleApiBuilder::SCHEME {
        let mut builder = ScaleApiBuilder::from_url(url)?
          .project(options.project.clone())
          .api_key(options.api_key.clone());
        if let Some(page_size) = options.page_size {
          builder = builder.page_size(page_size);
        }
        return Ok(InputWrapper::ScaleApi(builder.build()?));
      }
    }

    if url.scheme() == TaskFileInput::SCHEME {
      let input = TaskFileInput::from_url(url)?;
      return Ok(InputWrapper::TaskFile(input));
    }

    Err(InputError::SchemeMismatch)
  }
}

impl Iterator for InputWrapper {
  type Item = Result<Task, InputError>;

  fn next(&mut self) -> Option<Self::Item> {
    match self {
      #[cfg(feature = "scale_input")]
      InputWrapper::ScaleApi(input) => input.next().map(|r| r.map_err(InputError::from)),
      InputWrapper::TaskFile(input) => input.next().map(Ok),
    }
  }
}
