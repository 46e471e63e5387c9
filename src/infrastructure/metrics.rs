// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MetricsSettings;
use metrics::{describe_counter, describe_gauge, describe_histogram, Unit};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

/// 已提交的分析数
pub const ANALYSES_SUBMITTED: &str = "wcagrs_analyses_submitted_total";
/// 成功完成的分析数
pub const ANALYSES_FINISHED: &str = "wcagrs_analyses_finished_total";
/// 失败的分析数
pub const ANALYSES_FAILED: &str = "wcagrs_analyses_failed_total";
/// 单次分析从开始编排到终态的耗时
pub const ANALYSIS_DURATION: &str = "wcagrs_analysis_duration_seconds";
/// 当前连接的进度观察者数量
pub const OBSERVERS_CONNECTED: &str = "wcagrs_observers_connected";

pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr: SocketAddr = match settings.listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!(
                "Invalid metrics listen address {}: {}",
                settings.listen_addr, e
            );
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    describe_metrics();
    info!("Metrics exporter listening on {}", addr);
}

fn describe_metrics() {
    describe_counter!(ANALYSES_SUBMITTED, "Analyses accepted for processing");
    describe_counter!(ANALYSES_FINISHED, "Analyses that reached the finished state");
    describe_counter!(ANALYSES_FAILED, "Analyses that reached the failed state");
    describe_histogram!(
        ANALYSIS_DURATION,
        Unit::Seconds,
        "Time from orchestration start to a terminal state"
    );
    describe_gauge!(OBSERVERS_CONNECTED, "Currently connected progress observers");
}
