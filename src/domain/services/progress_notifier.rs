// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::analysis::ProgressUpdate;
use uuid::Uuid;

/// 进度通知特质
///
/// 编排器在每次状态持久化之后调用。实现必须立即返回，
/// 不得因为任何观察者而阻塞，也不向调用方报告投递失败。
pub trait ProgressNotifier: Send + Sync {
    /// 推送一次状态转换
    fn notify(&self, analysis_id: Uuid, update: &ProgressUpdate);
}
