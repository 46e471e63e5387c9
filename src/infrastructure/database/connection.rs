// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::config::settings::DatabaseSettings;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::info;

const MAX_LIFETIME_SECS: u64 = 3600;

/// 是否为 SQLite 内存库
///
/// 内存库的数据只存在于打开它的那个连接中。
pub fn is_in_memory_sqlite(url: &str) -> bool {
    url.starts_with("sqlite:") && (url.contains(":memory:") || url.contains("mode=memory"))
}

/// 根据配置构建连接选项
///
/// SQLite 内存库固定为单连接且不回收空闲连接，否则分析记录会随连接丢失。
pub fn connect_options(settings: &DatabaseSettings) -> ConnectOptions {
    let mut opt = ConnectOptions::new(settings.url.to_owned());

    if is_in_memory_sqlite(&settings.url) {
        opt.max_connections(1).min_connections(1);
    } else {
        if let Some(max) = settings.max_connections {
            opt.max_connections(max);
        }
        if let Some(min) = settings.min_connections {
            opt.min_connections(min);
        }
        if let Some(idle) = settings.idle_timeout {
            opt.idle_timeout(Duration::from_secs(idle));
        }
        opt.max_lifetime(Duration::from_secs(MAX_LIFETIME_SECS));
    }

    if let Some(timeout) = settings.connect_timeout {
        opt.connect_timeout(Duration::from_secs(timeout))
            .acquire_timeout(Duration::from_secs(timeout));
    }

    opt.sqlx_logging(true);
    opt
}

/// 创建分析记录存储的连接池
///
/// 同时支持 PostgreSQL 与 SQLite，由连接URL的协议决定。
pub async fn create_pool(settings: &DatabaseSettings) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(connect_options(settings)).await?;
    info!(backend = ?db.get_database_backend(), "Database connected");
    Ok(db)
}

#[cfg(test)]
#[path = "connection_test.rs"]
mod tests;
