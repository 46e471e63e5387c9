// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 规则名称到检查结果的映射
pub type AnalysisResults = BTreeMap<String, RuleResult>;

/// 单条可访问性规则的检查结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleResult {
    /// 是否通过检查
    pub passed: bool,
    /// 人类可读的结论
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// 规则特有的结构化细节
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl RuleResult {
    pub fn new(passed: bool) -> Self {
        Self {
            passed,
            message: None,
            details: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// 附加结构化细节；无法序列化的细节会被忽略
    pub fn with_details<T: Serialize>(mut self, details: &T) -> Self {
        self.details = serde_json::to_value(details).ok();
        self
    }
}
