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

use axum::{extract::Extension, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::services::graph_service::DocumentGraph;

/// 返回拼装好的授权端点地址
///
/// 地址由租户、客户端标识、回调地址和权限范围组成
pub async fn authorize_url<G: DocumentGraph + 'static>(
    Extension(graph): Extension<Arc<G>>,
) -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "authorize_url": graph.authorize_url()
    }))
}
