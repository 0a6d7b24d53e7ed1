// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::{
    extract::{Extension, Path},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::error;

use crate::domain::services::graph_service::DocumentGraph;
use crate::presentation::errors::AppError;
use crate::presentation::handlers::flow_from_headers;

/// 根据标识符获取站点
///
/// 携带Bearer令牌时以委托方式访问远程API，否则使用应用凭据
pub async fn get_site<G: DocumentGraph + 'static>(
    Path(site_id): Path<String>,
    headers: HeaderMap,
    Extension(graph): Extension<Arc<G>>,
) -> Result<impl IntoResponse, AppError> {
    let flow = flow_from_headers(&headers);
    let site = graph.site_by_id(&flow, &site_id).await.inspect_err(|e| {
        error!("Failed to fetch site {}: {}", site_id, e);
    })?;
    Ok(Json(site))
}

/// 根据显示名称查找站点
pub async fn get_site_by_name<G: DocumentGraph + 'static>(
    Path(name): Path<String>,
    Extension(graph): Extension<Arc<G>>,
) -> Result<impl IntoResponse, AppError> {
    match graph.site_by_name(&name).await? {
        Some(site) => Ok((StatusCode::OK, Json(site)).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "success": false,
                "error": "Site not found"
            })),
        )
            .into_response()),
    }
}
