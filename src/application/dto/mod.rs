// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义HTTP接口的请求与响应结构
pub mod analysis_request;
pub mod analysis_response;
