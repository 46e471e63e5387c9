// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

/// DOM 错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// 选择器无法解析
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
}

/// 文档树
///
/// 解析后的整棵节点树只由 `Document` 持有一次，
/// 所有 `Element` 都是借用该树的轻量句柄。
///
/// 注意：底层树不是 `Send`，文档应在同步作用域内创建并用完，
/// 不要跨越 `.await` 持有。
#[derive(Debug)]
pub struct Document {
    html: Html,
}

impl Document {
    pub(crate) fn new(html: Html) -> Self {
        Self { html }
    }

    /// 文档根元素（`<html>`）
    pub fn root(&self) -> Element<'_> {
        Element::new(self.html.root_element())
    }

    /// 返回第一个匹配选择器的元素（文档顺序）
    ///
    /// # 参数
    ///
    /// * `selector` - CSS 选择器
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(Element))` - 第一个匹配的元素
    /// * `Ok(None)` - 没有匹配的元素
    /// * `Err(DomError)` - 选择器无法解析
    pub fn query_selector(&self, selector: &str) -> Result<Option<Element<'_>>, DomError> {
        let selector = parse_selector(selector)?;
        Ok(self.html.select(&selector).next().map(Element::new))
    }

    /// 返回所有匹配选择器的元素（文档顺序）
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<Element<'_>>, DomError> {
        let selector = parse_selector(selector)?;
        Ok(self.html.select(&selector).map(Element::new).collect())
    }

    /// 按标签名查找元素
    ///
    /// 标签名比较不区分大小写，结果按文档顺序排列。
    pub fn get_elements_by_tag_name(&self, tag: &str) -> Vec<Element<'_>> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name().eq_ignore_ascii_case(tag))
            .map(Element::new)
            .collect()
    }
}

/// 元素句柄
///
/// 指向文档树中某个元素节点的不可变视图，复制代价很低。
#[derive(Debug, Clone, Copy)]
pub struct Element<'a> {
    inner: ElementRef<'a>,
}

impl<'a> Element<'a> {
    fn new(inner: ElementRef<'a>) -> Self {
        Self { inner }
    }

    /// 小写标签名
    pub fn tag_name(&self) -> String {
        self.inner.value().name().to_ascii_lowercase()
    }

    /// 读取属性值，属性名不区分大小写
    pub fn get_attribute(&self, name: &str) -> Option<&'a str> {
        self.inner.value().attr(&name.to_ascii_lowercase())
    }

    /// 判断属性是否存在（包括空值属性）
    pub fn has_attribute(&self, name: &str) -> bool {
        self.get_attribute(name).is_some()
    }

    /// 所有后代文本节点按文档顺序拼接
    pub fn text_content(&self) -> String {
        self.inner.text().collect()
    }

    /// 父元素；根元素返回 `None`
    pub fn parent(&self) -> Option<Element<'a>> {
        self.inner
            .parent()
            .and_then(ElementRef::wrap)
            .map(Element::new)
    }

    /// 直接子元素（不含文本与注释节点）
    pub fn children(&self) -> Vec<Element<'a>> {
        self.inner
            .children()
            .filter_map(ElementRef::wrap)
            .map(Element::new)
            .collect()
    }

    /// 在后代中查找第一个匹配的元素，不包含自身
    pub fn query_selector(&self, selector: &str) -> Result<Option<Element<'a>>, DomError> {
        Ok(self.query_selector_all(selector)?.into_iter().next())
    }

    /// 在后代中查找所有匹配的元素，不包含自身
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<Element<'a>>, DomError> {
        let selector = parse_selector(selector)?;
        let own_id = self.inner.id();
        Ok(self
            .inner
            .select(&selector)
            .filter(|el| el.id() != own_id)
            .map(Element::new)
            .collect())
    }
}

impl PartialEq for Element<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id() == other.inner.id()
    }
}

impl Eq for Element<'_> {}

fn parse_selector(selector: &str) -> Result<Selector, DomError> {
    Selector::parse(selector)
        .map_err(|e| DomError::InvalidSelector(format!("{}: {:?}", selector, e)))
}

#[cfg(test)]
#[path = "document_test.rs"]
mod tests;
