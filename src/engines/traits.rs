// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

/// 引擎错误类型
///
/// 只表示传输层失败（DNS、连接、TLS、超时、读取响应体等）。
/// 非 2xx 响应不是错误，由调用方根据 `FetchResponse` 判断。
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败，消息透传底层错误
    #[error(transparent)]
    RequestFailed(#[from] reqwest::Error),
    /// 其他错误
    #[error("{0}")]
    Other(String),
}

/// 抓取响应
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// HTTP状态码
    pub status_code: u16,
    /// 状态文本，如 "Not Found"
    pub status_text: String,
    /// 响应内容，非 2xx 时为空
    pub content: String,
    /// 内容类型
    pub content_type: String,
    /// 响应时间（毫秒）
    pub response_time_ms: u64,
}

impl FetchResponse {
    /// 是否为 2xx 响应
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// 页面抓取引擎特质
///
/// 每次调用只发起一次请求，不做任何重试。
#[async_trait]
pub trait FetchEngine: Send + Sync {
    /// 抓取目标页面
    async fn fetch(&self, url: &str) -> Result<FetchResponse, EngineError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
