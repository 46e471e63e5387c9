// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 分析记录（analysis）：一次 URL 分析提交的生命周期与进度负载
/// - 规则结果（rule_result）：单条可访问性规则的检查结论
pub mod analysis;
pub mod rule_result;
