// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    application::{
        dto::{
            analysis_request::{AnalysisListQueryDto, AnalyzeRequestDto},
            analysis_response::SubmittedAnalysisDto,
        },
        use_cases::analysis_use_case::AnalysisUseCase,
    },
    domain::repositories::analysis_repository::AnalysisRepository,
    presentation::errors::AppError,
    queue::analysis_queue::AnalysisQueue,
};

/// 提交新的分析
pub async fn submit_analysis<R, Q>(
    Extension(use_case): Extension<Arc<AnalysisUseCase<R, Q>>>,
    Json(payload): Json<AnalyzeRequestDto>,
) -> Result<impl IntoResponse, AppError>
where
    R: AnalysisRepository + 'static,
    Q: AnalysisQueue + 'static,
{
    let analysis = use_case.submit(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(SubmittedAnalysisDto::from(&analysis)),
    ))
}

/// 分页获取历史记录
pub async fn list_analyses<R, Q>(
    Extension(use_case): Extension<Arc<AnalysisUseCase<R, Q>>>,
    Query(query): Query<AnalysisListQueryDto>,
) -> Result<impl IntoResponse, AppError>
where
    R: AnalysisRepository + 'static,
    Q: AnalysisQueue + 'static,
{
    let page = use_case.list(query).await?;
    Ok(Json(page))
}

/// 获取单条分析详情
pub async fn get_analysis<R, Q>(
    Extension(use_case): Extension<Arc<AnalysisUseCase<R, Q>>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError>
where
    R: AnalysisRepository + 'static,
    Q: AnalysisQueue + 'static,
{
    let analysis = use_case.get(id).await?;
    Ok(Json(analysis))
}
