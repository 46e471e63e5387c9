// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 分析编排（analysis_orchestrator）：驱动单次分析的状态机
/// - 进度通知（progress_notifier）：状态转换的推送接口
pub mod analysis_orchestrator;
pub mod progress_notifier;
