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

use crate::utils::errors::{GraphError, ServiceError};

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_message = self.0.to_string();

        let status = if let Some(service_err) = self.0.downcast_ref::<ServiceError>() {
            match service_err {
                ServiceError::Graph(GraphError::RemoteStatus { status: 404, .. }) => {
                    StatusCode::NOT_FOUND
                }
                ServiceError::Graph(_) => StatusCode::BAD_GATEWAY,
                ServiceError::Auth(_) => StatusCode::BAD_GATEWAY,
            }
        } else if self
            .0
            .downcast_ref::<validator::ValidationErrors>()
            .is_some()
        {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

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
