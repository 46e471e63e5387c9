// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::dom::Document;
use crate::domain::models::rule_result::RuleResult;
use crate::domain::rules::traits::WcagRule;
use serde::Serialize;
use std::collections::HashSet;

/// 输入框标签规则细节
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputLabelDetails {
    /// 输入框总数
    pub total_inputs: usize,
    /// 没有显式关联标签的输入框数
    pub inputs_without_label: usize,
}

/// 输入框显式标签检查
///
/// 输入框需要非空 `id`，且存在 `for` 与之完全相等的 `<label>`。
/// 没有 `id` 的输入框一律视为未关联。
#[derive(Debug, Default, Clone, Copy)]
pub struct InputLabelRule;

impl WcagRule for InputLabelRule {
    fn name(&self) -> &str {
        "input-label-check"
    }

    fn analyse(&self, doc: &Document) -> RuleResult {
        let inputs = doc.get_elements_by_tag_name("input");
        let labels = doc.get_elements_by_tag_name("label");
        let label_targets: HashSet<&str> = labels
            .iter()
            .filter_map(|label| label.get_attribute("for"))
            .collect();

        let unlabeled = inputs
            .iter()
            .filter(|input| match input.get_attribute("id") {
                Some(id) if !id.is_empty() => !label_targets.contains(id),
                _ => true,
            })
            .count();

        let message = if unlabeled == 0 {
            "All inputs have associated labels".to_string()
        } else {
            format!(
                "{} of {} inputs missing explicit label association",
                unlabeled,
                inputs.len()
            )
        };

        RuleResult::new(unlabeled == 0)
            .with_message(message)
            .with_details(&InputLabelDetails {
                total_inputs: inputs.len(),
                inputs_without_label: unlabeled,
            })
    }
}
