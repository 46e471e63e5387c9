// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 默认页码
pub const DEFAULT_PAGE: u64 = 1;
/// 默认每页条数
pub const DEFAULT_LIMIT: u64 = 10;

/// 分析提交请求DTO
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct AnalyzeRequestDto {
    /// 要分析的网页URL
    #[validate(url)]
    pub url: String,
}

/// 历史记录分页查询DTO
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct AnalysisListQueryDto {
    /// 页码，从 1 开始
    #[validate(range(min = 1))]
    pub page: Option<u64>,

    /// 每页条数
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u64>,
}

impl AnalysisListQueryDto {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    /// 跳过的记录数
    pub fn skip(&self) -> u64 {
        self.page()
            .saturating_sub(1)
            .saturating_mul(self.limit())
    }
}
