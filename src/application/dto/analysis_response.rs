// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::analysis::{Analysis, AnalysisStatus};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 提交成功后立即返回的摘要
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAnalysisDto {
    pub id: Uuid,
    pub url: String,
    pub status: AnalysisStatus,
    pub created_at: DateTime<FixedOffset>,
}

impl From<&Analysis> for SubmittedAnalysisDto {
    fn from(analysis: &Analysis) -> Self {
        Self {
            id: analysis.id,
            url: analysis.url.clone(),
            status: analysis.status,
            created_at: analysis.created_at,
        }
    }
}

/// 历史记录分页结果
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPageDto {
    /// 当前页记录，按创建时间倒序
    pub items: Vec<Analysis>,
    /// 记录总数
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    /// 总页数，`ceil(total / limit)`
    pub total_pages: u64,
}

impl AnalysisPageDto {
    pub fn new(items: Vec<Analysis>, total: u64, page: u64, limit: u64) -> Self {
        Self {
            items,
            total,
            page,
            limit,
            total_pages: total.div_ceil(limit.max(1)),
        }
    }
}
