// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 队列模块
///
/// 提供提交与编排之间的消息传递通道
pub mod analysis_queue;
