// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::FetchSettings;
use crate::engines::traits::{EngineError, FetchEngine, FetchResponse};
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::debug;

/// 抓取引擎
///
/// 基于reqwest实现的基本HTTP抓取引擎。客户端在创建时构建一次，
/// 抓取超时由配置决定。
#[derive(Debug, Clone)]
pub struct ReqwestEngine {
    client: reqwest::Client,
}

impl ReqwestEngine {
    /// 根据抓取配置创建引擎
    ///
    /// # 参数
    ///
    /// * `settings` - 抓取配置
    ///
    /// # 返回值
    ///
    /// * `Ok(ReqwestEngine)` - 引擎实例
    /// * `Err(EngineError)` - HTTP 客户端构建失败
    pub fn new(settings: &FetchSettings) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FetchEngine for ReqwestEngine {
    /// 执行HTTP抓取
    ///
    /// # 参数
    ///
    /// * `url` - 目标URL
    ///
    /// # 返回值
    ///
    /// * `Ok(FetchResponse)` - 任意状态码的响应
    /// * `Err(EngineError)` - 传输层失败
    async fn fetch(&self, url: &str) -> Result<FetchResponse, EngineError> {
        let start = Instant::now();
        let response = self.client.get(url).send().await?;

        let status = response.status();
        let status_text = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_u16().to_string());

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.trim().is_empty())
            .unwrap_or("text/html")
            .to_string();

        // Body is only needed for successful responses
        let content = if status.is_success() {
            response.text().await?
        } else {
            String::new()
        };

        debug!(
            "Fetched {} with status {} in {}ms",
            url,
            status.as_u16(),
            start.elapsed().as_millis()
        );

        Ok(FetchResponse {
            status_code: status.as_u16(),
            status_text,
            content,
            content_type,
            response_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
