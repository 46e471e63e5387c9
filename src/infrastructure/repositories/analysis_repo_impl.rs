// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::analysis::{Analysis, DomainError};
use crate::domain::repositories::analysis_repository::{
    AnalysisQueryParams, AnalysisRepository, RepositoryError,
};
use crate::infrastructure::database::entities::url_analysis as analysis_entity;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

/// 分析记录仓库实现
#[derive(Clone)]
pub struct AnalysisRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl AnalysisRepositoryImpl {
    /// 创建新的分析记录仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl TryFrom<analysis_entity::Model> for Analysis {
    type Error = RepositoryError;

    fn try_from(model: analysis_entity::Model) -> Result<Self, Self::Error> {
        let status = model
            .status
            .parse()
            .map_err(|e: DomainError| RepositoryError::Corrupted(e.to_string()))?;
        let results = model
            .results
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| RepositoryError::Corrupted(format!("Invalid results payload: {}", e)))?;

        Ok(Self {
            id: model.id,
            url: model.url,
            status,
            results,
            error_message: model.error_message,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

fn results_to_json(analysis: &Analysis) -> Result<Option<serde_json::Value>, RepositoryError> {
    analysis
        .results
        .as_ref()
        .map(serde_json::to_value)
        .transpose()
        .map_err(|e| RepositoryError::Corrupted(format!("Unserializable results: {}", e)))
}

#[async_trait]
impl AnalysisRepository for AnalysisRepositoryImpl {
    async fn create(&self, analysis: &Analysis) -> Result<Analysis, RepositoryError> {
        let model = analysis_entity::ActiveModel {
            id: Set(analysis.id),
            url: Set(analysis.url.clone()),
            status: Set(analysis.status.to_string()),
            results: Set(results_to_json(analysis)?),
            error_message: Set(analysis.error_message.clone()),
            created_at: Set(analysis.created_at),
            updated_at: Set(analysis.updated_at),
        };

        model.insert(self.db.as_ref()).await?;
        Ok(analysis.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Analysis>, RepositoryError> {
        analysis_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .map(Analysis::try_from)
            .transpose()
    }

    async fn list(
        &self,
        params: AnalysisQueryParams,
    ) -> Result<(Vec<Analysis>, u64), RepositoryError> {
        let total = analysis_entity::Entity::find()
            .count(self.db.as_ref())
            .await?;

        let models = analysis_entity::Entity::find()
            .order_by_desc(analysis_entity::Column::CreatedAt)
            .offset(params.skip)
            .limit(params.limit)
            .all(self.db.as_ref())
            .await?;

        let items = models
            .into_iter()
            .map(Analysis::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((items, total))
    }

    async fn save(&self, analysis: &Analysis) -> Result<Analysis, RepositoryError> {
        let mut model: analysis_entity::ActiveModel = analysis_entity::Entity::find_by_id(analysis.id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?
            .into();

        let updated_at = Utc::now().fixed_offset();
        model.status = Set(analysis.status.to_string());
        model.results = Set(results_to_json(analysis)?);
        model.error_message = Set(analysis.error_message.clone());
        model.updated_at = Set(updated_at);

        model.update(self.db.as_ref()).await?;

        let mut saved = analysis.clone();
        saved.updated_at = updated_at;
        Ok(saved)
    }
}
