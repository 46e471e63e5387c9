// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// DOM 抽象模块
///
/// 将原始 HTML 解析为只读、可导航的文档树，规则只依赖此处的
/// `Document` / `Element` 接口，而不直接接触具体的解析器实现。
///
/// - 文档（document）：文档树与元素句柄
/// - 解析器（parser）：HTML 字符串到文档树的转换
pub mod document;
pub mod parser;

pub use document::{Document, DomError, Element};
pub use parser::{DomParser, ScraperParser};
