// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 抓取引擎模块
///
/// - 特质（traits）：抓取引擎接口与响应类型
/// - reqwest 引擎（reqwest_engine）：基于 reqwest 的单次 HTTP 抓取
pub mod reqwest_engine;
pub mod traits;
