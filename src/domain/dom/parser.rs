// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::dom::document::Document;
use scraper::Html;

/// HTML 解析器特质
pub trait DomParser: Send + Sync {
    /// 将 HTML 字符串解析为文档树
    ///
    /// 解析永远不会失败：畸形的 HTML 会按浏览器规则进行容错恢复。
    fn parse_from_string(&self, html: &str) -> Document;
}

/// 基于 scraper（html5ever）的解析器
///
/// html5ever 实现了 WHATWG 解析算法，会自动补全 `<head>` / `<body>`，
/// 并关闭未闭合的标签。
#[derive(Debug, Default, Clone, Copy)]
pub struct ScraperParser;

impl DomParser for ScraperParser {
    fn parse_from_string(&self, html: &str) -> Document {
        Document::new(Html::parse_document(html))
    }
}
