// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节，提供对具体技术的抽象和封装。
///
/// 包含的子模块：
/// - 数据库（database）：提供数据库连接和实体映射
/// - 指标（metrics）：Prometheus 导出与指标名称
/// - 实时推送（realtime）：进度广播与观察者管理
/// - 仓库实现（repositories）：提供领域仓库接口的具体实现
///
/// 基础设施层依赖于领域层的抽象接口，领域层不感知具体技术实现。
pub mod database;
pub mod metrics;
pub mod realtime;
pub mod repositories;
