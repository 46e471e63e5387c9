// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::dom::Document;
use crate::domain::models::rule_result::RuleResult;
use crate::domain::rules::traits::WcagRule;
use serde::Serialize;

/// 图片替代文本规则细节
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImgAltDetails {
    /// 图片总数
    pub total_images: usize,
    /// 缺少 alt 属性的图片数
    pub images_without_alt: usize,
    /// alt 属性为空白的图片数
    pub images_with_empty_alt: usize,
}

/// 图片替代文本检查
///
/// 没有 `alt` 属性的图片记为缺失，`alt` 去除空白后为空的记为空值，
/// 两者之和为零时通过。
#[derive(Debug, Default, Clone, Copy)]
pub struct ImgAltRule;

impl WcagRule for ImgAltRule {
    fn name(&self) -> &str {
        "img-alt-check"
    }

    fn analyse(&self, doc: &Document) -> RuleResult {
        let images = doc.get_elements_by_tag_name("img");

        let mut missing = 0;
        let mut empty = 0;
        for img in &images {
            match img.get_attribute("alt") {
                None => missing += 1,
                Some(alt) if alt.trim().is_empty() => empty += 1,
                Some(_) => {}
            }
        }

        let offending = missing + empty;
        let message = if offending == 0 {
            "All images have alt attributes".to_string()
        } else {
            format!(
                "{} of {} images missing or have empty alt attribute",
                offending,
                images.len()
            )
        };

        RuleResult::new(offending == 0)
            .with_message(message)
            .with_details(&ImgAltDetails {
                total_images: images.len(),
                images_without_alt: missing,
                images_with_empty_alt: empty,
            })
    }
}
