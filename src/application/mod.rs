// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含面向接口层的数据传输对象和用例实现，
/// 负责输入校验并协调领域仓库与分析队列
pub mod dto;
pub mod use_cases;
