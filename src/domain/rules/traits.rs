// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::dom::Document;
use crate::domain::models::rule_result::RuleResult;

/// 可访问性规则特质
pub trait WcagRule: Send + Sync {
    /// 规则名称，作为结果映射中的唯一键
    fn name(&self) -> &str;

    /// 对文档执行检查
    ///
    /// 必须是确定性的，且能正确处理零匹配的情况。
    fn analyse(&self, doc: &Document) -> RuleResult;
}
