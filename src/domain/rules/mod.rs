// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 可访问性规则模块
///
/// 每条规则都是一个纯函数式检查：输入同一份文档，输出确定的
/// `RuleResult`，不产生任何副作用。`WcagAnalyser` 按注册顺序
/// 对同一份文档执行所有规则。
pub mod analyser;
pub mod img_alt_rule;
pub mod input_label_rule;
pub mod title_rule;
pub mod traits;

pub use analyser::{AnalyserError, WcagAnalyser};
pub use img_alt_rule::ImgAltRule;
pub use input_label_rule::InputLabelRule;
pub use title_rule::TitleRule;
pub use traits::WcagRule;
