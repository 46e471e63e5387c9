// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 实时推送模块
///
/// 将分析进度以尽力而为的方式广播给所有已连接的观察者
pub mod progress_broadcaster;
