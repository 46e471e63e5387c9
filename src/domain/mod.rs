// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - DOM 抽象（dom）：HTML 解析与只读文档树
/// - 领域模型（models）：分析记录与规则结果
/// - 仓库接口（repositories）：数据持久化抽象接口
/// - 规则（rules）：可插拔的可访问性检查与分析器
/// - 服务（services）：分析状态机编排与进度通知
///
/// 领域层是系统的核心，体现了纯粹的业务逻辑和业务规则。
pub mod dom;
pub mod models;
pub mod repositories;
pub mod rules;
pub mod services;
