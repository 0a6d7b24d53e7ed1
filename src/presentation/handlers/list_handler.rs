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
    Json,
};
use std::sync::Arc;
use tracing::error;
use validator::Validate;

use crate::application::dto::item_request::AddItemDto;
use crate::application::dto::provision_request::ProvisionListDto;
use crate::domain::models::list::ListItem;
use crate::domain::services::graph_service::{DocumentGraph, ProvisionedList};
use crate::presentation::errors::AppError;
use crate::presentation::handlers::flow_from_headers;

/// 开通列表
///
/// 依次执行创建列表与两次种子项插入；任一步失败即中止，
/// 已产生的远端效果不回滚
pub async fn provision_list<G: DocumentGraph + 'static>(
    Path(site_id): Path<String>,
    headers: HeaderMap,
    Extension(graph): Extension<Arc<G>>,
    Json(payload): Json<ProvisionListDto>,
) -> Result<(StatusCode, Json<ProvisionedList>), AppError> {
    payload.validate()?;

    let flow = flow_from_headers(&headers);
    let outcome = graph
        .provision_list(&flow, &site_id, payload.into_spec())
        .await
        .inspect_err(|e| {
            error!("Failed to provision list in site {}: {}", site_id, e);
        })?;

    Ok((StatusCode::CREATED, Json(outcome)))
}

/// 根据显示名称查找列表
///
/// 名称不存在时返回空结果而非错误
pub async fn get_list_by_name<G: DocumentGraph + 'static>(
    Path((site_id, name)): Path<(String, String)>,
    Extension(graph): Extension<Arc<G>>,
) -> Result<Json<serde_json::Value>, AppError> {
    let list = graph.list_by_name(&site_id, &name).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "list": list
    })))
}

/// 向既有列表追加一条列表项
pub async fn add_item<G: DocumentGraph + 'static>(
    Path((site_id, list_id)): Path<(String, String)>,
    headers: HeaderMap,
    Extension(graph): Extension<Arc<G>>,
    Json(payload): Json<AddItemDto>,
) -> Result<(StatusCode, Json<ListItem>), AppError> {
    payload.validate()?;

    let flow = flow_from_headers(&headers);
    let item = graph
        .add_item(&flow, &site_id, &list_id, &payload.into_spec())
        .await
        .inspect_err(|e| {
            error!("Failed to add item to list {} in site {}: {}", list_id, site_id, e);
        })?;

    Ok((StatusCode::CREATED, Json(item)))
}
