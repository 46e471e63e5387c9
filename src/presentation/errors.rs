// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::application::use_cases::analysis_use_case::AnalysisUseCaseError;
use crate::domain::repositories::analysis_repository::RepositoryError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    fn status(&self) -> StatusCode {
        if let Some(err) = self.0.downcast_ref::<AnalysisUseCaseError>() {
            return match err {
                AnalysisUseCaseError::ValidationError(_) => StatusCode::BAD_REQUEST,
                AnalysisUseCaseError::NotFound
                | AnalysisUseCaseError::Repository(RepositoryError::NotFound) => {
                    StatusCode::NOT_FOUND
                }
                AnalysisUseCaseError::Repository(_) | AnalysisUseCaseError::Queue(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
        }

        match self.0.downcast_ref::<RepositoryError>() {
            Some(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = self.0.to_string();

        if status.is_server_error() {
            error!("Request failed: {}", error_message);
        }

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
