// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::analysis::Analysis;
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 持久化数据无法还原为领域对象
    #[error("Corrupted record: {0}")]
    Corrupted(String),
}

/// 历史记录查询参数
///
/// 结果总是按创建时间倒序排列。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisQueryParams {
    /// 跳过的记录数
    pub skip: u64,
    /// 返回的最大记录数
    pub limit: u64,
}

/// 分析记录仓库特质
///
/// 每条记录在整个生命周期内只有一个写入者（它自己的编排任务），
/// 因此实现无需跨记录加锁。
#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    /// 创建新记录
    async fn create(&self, analysis: &Analysis) -> Result<Analysis, RepositoryError>;
    /// 根据ID查找记录
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Analysis>, RepositoryError>;
    /// 分页查询历史记录，返回当前页与总数
    async fn list(
        &self,
        params: AnalysisQueryParams,
    ) -> Result<(Vec<Analysis>, u64), RepositoryError>;
    /// 持久化当前字段并刷新 `updated_at`
    async fn save(&self, analysis: &Analysis) -> Result<Analysis, RepositoryError>;
}
