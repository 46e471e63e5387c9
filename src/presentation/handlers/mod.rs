// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// - 分析处理器（analysis_handler）：提交、历史列表与单条查询
/// - WebSocket 处理器（ws_handler）：进度观察者连接
pub mod analysis_handler;
pub mod ws_handler;
