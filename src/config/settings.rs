// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、数据库、页面抓取、跨域、进度推送和指标等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 页面抓取配置
    pub fetch: FetchSettings,
    /// 跨域配置
    pub cors: CorsSettings,
    /// 进度推送配置
    pub broadcast: BroadcastSettings,
    /// 指标配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 数据库配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

/// 页面抓取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct FetchSettings {
    /// 单次抓取超时时间（秒）
    pub timeout_secs: u64,
    /// 请求使用的 User-Agent
    pub user_agent: String,
}

/// 跨域配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// 允许访问的前端来源
    pub frontend_url: String,
}

/// 进度推送配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct BroadcastSettings {
    /// 每个观察者的待发送消息上限，超出后丢弃
    pub observer_buffer: usize,
}

/// 指标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用 Prometheus 导出
    pub enabled: bool,
    /// 导出监听地址
    pub listen_addr: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 环境名取自 `APP_ENVIRONMENT`，缺省为 `default`
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::for_environment(&env)
    }

    /// 按指定环境加载配置
    ///
    /// 优先级从低到高：内置默认值、`config/default.toml`、
    /// `config/{env}.toml`、`WCAGRS__` 前缀的环境变量
    pub fn for_environment(env: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default DB settings
            .set_default("database.url", "sqlite://wcagrs.db?mode=rwc")?
            .set_default("database.max_connections", 20)?
            .set_default("database.min_connections", 1)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            // Default fetch settings
            .set_default("fetch.timeout_secs", 30)?
            .set_default(
                "fetch.user_agent",
                concat!("wcagrs/", env!("CARGO_PKG_VERSION")),
            )?
            .set_default("cors.frontend_url", "http://localhost:3001")?
            .set_default("broadcast.observer_buffer", 64)?
            // Metrics exporter is opt-in
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen_addr", "0.0.0.0:9000")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("WCAGRS").separator("__"));

        builder.build()?.try_deserialize()
    }

    /// 服务器监听地址，形如 `host:port`
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
