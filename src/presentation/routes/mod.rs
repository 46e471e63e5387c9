// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::analysis_use_case::AnalysisUseCase;
use crate::config::settings::CorsSettings;
use crate::domain::repositories::analysis_repository::AnalysisRepository;
use crate::presentation::handlers::analysis_handler;
use crate::presentation::handlers::ws_handler::{self, RealtimeState};
use crate::queue::analysis_queue::AnalysisQueue;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

/// 创建应用路由
///
/// # 参数
///
/// * `use_case` - 分析用例
/// * `realtime` - WebSocket 推送状态
/// * `cors` - 跨域配置
///
/// # 返回值
///
/// 返回配置好的路由
pub fn app_router<R, Q>(
    use_case: Arc<AnalysisUseCase<R, Q>>,
    realtime: RealtimeState,
    cors: &CorsSettings,
) -> Router
where
    R: AnalysisRepository + 'static,
    Q: AnalysisQueue + 'static,
{
    let api_routes = Router::new()
        .route(
            "/api/analyze",
            post(analysis_handler::submit_analysis::<R, Q>),
        )
        .route(
            "/api/analyses",
            get(analysis_handler::list_analyses::<R, Q>),
        )
        .route(
            "/api/analyses/{id}",
            get(analysis_handler::get_analysis::<R, Q>),
        )
        .route("/api/version", get(version));

    Router::new()
        .route("/health", get(health_check))
        .route("/ws", get(ws_handler::progress_socket))
        .merge(api_routes)
        .layer(Extension(use_case))
        .layer(Extension(realtime))
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    match settings.frontend_url.parse::<HeaderValue>() {
        Ok(origin) => layer.allow_origin(origin),
        Err(e) => {
            warn!(
                "Invalid CORS origin {}: {}, cross-origin requests disabled",
                settings.frontend_url, e
            );
            layer
        }
    }
}

/// 健康检查端点
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// 版本信息端点
pub async fn version() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
