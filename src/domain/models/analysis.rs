// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::rule_result::AnalysisResults;
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// 分析记录
///
/// 表示一次 URL 可访问性分析提交的完整生命周期。记录在提交时
/// 同步创建，之后只由它自己的编排任务修改，进入终态后不再变化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// 分析唯一标识符
    pub id: Uuid,
    /// 目标URL，创建后不可变
    pub url: String,
    /// 当前状态
    pub status: AnalysisStatus,
    /// 各规则的检查结果，仅在 Finished 状态下存在
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<AnalysisResults>,
    /// 失败原因，仅在 Failed 状态下存在
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// 创建时间
    pub created_at: DateTime<FixedOffset>,
    /// 最后一次持久化的时间
    pub updated_at: DateTime<FixedOffset>,
}

/// 分析状态枚举
///
/// 状态转换遵循以下流程，且不会回退：
/// Pending → Fetching → Ongoing → Finished/Failed
///
/// 任意非终态都可以直接进入 Failed。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    /// 已创建，等待编排任务接手
    #[default]
    Pending,
    /// 正在抓取目标页面
    Fetching,
    /// 正在解析并执行规则
    Ongoing,
    /// 已完成，结果可用
    Finished,
    /// 已失败，错误信息可用
    Failed,
}

impl AnalysisStatus {
    /// 是否为终态
    pub fn is_terminal(&self) -> bool {
        matches!(self, AnalysisStatus::Finished | AnalysisStatus::Failed)
    }
}

impl fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AnalysisStatus::Pending => write!(f, "pending"),
            AnalysisStatus::Fetching => write!(f, "fetching"),
            AnalysisStatus::Ongoing => write!(f, "ongoing"),
            AnalysisStatus::Finished => write!(f, "finished"),
            AnalysisStatus::Failed => write!(f, "failed"),
        }
    }
}

impl FromStr for AnalysisStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(AnalysisStatus::Pending),
            "fetching" => Ok(AnalysisStatus::Fetching),
            "ongoing" => Ok(AnalysisStatus::Ongoing),
            "finished" => Ok(AnalysisStatus::Finished),
            "failed" => Ok(AnalysisStatus::Failed),
            other => Err(DomainError::Validation(format!(
                "Unknown analysis status: {}",
                other
            ))),
        }
    }
}

/// 领域错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// 状态转换不符合生命周期规则
    #[error("Invalid state transition from {from} to {to}")]
    InvalidStateTransition {
        from: AnalysisStatus,
        to: AnalysisStatus,
    },

    /// 输入数据不符合领域规则
    #[error("Validation error: {0}")]
    Validation(String),
}

impl Analysis {
    /// 创建一个新的 Pending 分析记录
    pub fn new(url: impl Into<String>) -> Self {
        let now: DateTime<FixedOffset> = Utc::now().into();
        Self {
            id: Uuid::new_v4(),
            url: url.into(),
            status: AnalysisStatus::Pending,
            results: None,
            error_message: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Pending → Fetching
    pub fn start_fetching(&mut self) -> Result<(), DomainError> {
        self.advance(AnalysisStatus::Pending, AnalysisStatus::Fetching)
    }

    /// Fetching → Ongoing
    pub fn start_evaluating(&mut self) -> Result<(), DomainError> {
        self.advance(AnalysisStatus::Fetching, AnalysisStatus::Ongoing)
    }

    /// Ongoing → Finished，并附加规则结果
    pub fn finish(&mut self, results: AnalysisResults) -> Result<(), DomainError> {
        self.advance(AnalysisStatus::Ongoing, AnalysisStatus::Finished)?;
        self.results = Some(results);
        Ok(())
    }

    /// 任意非终态 → Failed，并记录错误信息
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), DomainError> {
        if self.status.is_terminal() {
            return Err(DomainError::InvalidStateTransition {
                from: self.status,
                to: AnalysisStatus::Failed,
            });
        }
        self.status = AnalysisStatus::Failed;
        self.results = None;
        self.error_message = Some(message.into());
        Ok(())
    }

    fn advance(&mut self, from: AnalysisStatus, to: AnalysisStatus) -> Result<(), DomainError> {
        if self.status != from {
            return Err(DomainError::InvalidStateTransition {
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }
}

/// 进度事件负载
///
/// 每次状态转换后推送给观察者。`results` 只在 Finished 时携带，
/// `error_message` 只在 Failed 时携带。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub status: AnalysisStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<AnalysisResults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl From<&Analysis> for ProgressUpdate {
    fn from(analysis: &Analysis) -> Self {
        Self {
            status: analysis.status,
            results: match analysis.status {
                AnalysisStatus::Finished => analysis.results.clone(),
                _ => None,
            },
            error_message: match analysis.status {
                AnalysisStatus::Failed => analysis.error_message.clone(),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
#[path = "analysis_test.rs"]
mod tests;
