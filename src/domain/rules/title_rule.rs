// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::dom::Document;
use crate::domain::models::rule_result::RuleResult;
use crate::domain::rules::traits::WcagRule;
use serde::Serialize;

/// 标题规则细节
#[derive(Debug, Serialize)]
pub struct TitleDetails {
    /// 去除首尾空白后的标题文本
    pub title: Option<String>,
}

/// 页面标题检查
///
/// 文档中第一个 `<title>` 去除空白后非空即通过。
#[derive(Debug, Default, Clone, Copy)]
pub struct TitleRule;

impl WcagRule for TitleRule {
    fn name(&self) -> &str {
        "title-check"
    }

    fn analyse(&self, doc: &Document) -> RuleResult {
        let title = doc
            .get_elements_by_tag_name("title")
            .first()
            .map(|el| el.text_content().trim().to_string())
            .filter(|text| !text.is_empty());

        let passed = title.is_some();
        RuleResult::new(passed)
            .with_message(if passed {
                "Title exists and is not empty"
            } else {
                "Title missing or empty"
            })
            .with_details(&TitleDetails { title })
    }
}
