// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::dom::Document;
use crate::domain::models::rule_result::AnalysisResults;
use crate::domain::rules::traits::WcagRule;
use crate::domain::rules::{ImgAltRule, InputLabelRule, TitleRule};
use std::fmt;
use thiserror::Error;

/// 规则注册错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyserError {
    /// 同名规则已注册，结果映射中的键会冲突
    #[error("Rule already registered: {0}")]
    DuplicateRule(String),
}

/// WCAG 分析器
///
/// 按注册顺序保存规则，对同一份文档依次执行每条规则一次。
///
/// ```ignore
/// let analyser = WcagAnalyser::new()
///     .add_rule(TitleRule)?
///     .add_rule(ImgAltRule)?;
/// let results = analyser.analyse(&doc);
/// ```
#[derive(Default)]
pub struct WcagAnalyser {
    rules: Vec<Box<dyn WcagRule>>,
}

impl WcagAnalyser {
    /// 创建不含任何规则的分析器
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建注册了全部内置规则的分析器
    pub fn with_default_rules() -> Self {
        Self {
            rules: vec![
                Box::new(TitleRule),
                Box::new(ImgAltRule),
                Box::new(InputLabelRule),
            ],
        }
    }

    /// 注册规则（链式调用）
    ///
    /// # 返回值
    ///
    /// * `Ok(Self)` - 注册后的分析器
    /// * `Err(AnalyserError)` - 已存在同名规则
    pub fn add_rule<R>(mut self, rule: R) -> Result<Self, AnalyserError>
    where
        R: WcagRule + 'static,
    {
        if self.rules.iter().any(|r| r.name() == rule.name()) {
            return Err(AnalyserError::DuplicateRule(rule.name().to_string()));
        }
        self.rules.push(Box::new(rule));
        Ok(self)
    }

    /// 已注册规则的名称（注册顺序）
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 对文档执行所有已注册规则
    pub fn analyse(&self, doc: &Document) -> AnalysisResults {
        self.rules
            .iter()
            .map(|rule| (rule.name().to_string(), rule.analyse(doc)))
            .collect()
    }
}

impl fmt::Debug for WcagAnalyser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WcagAnalyser")
            .field("rules", &self.rule_names())
            .finish()
    }
}
