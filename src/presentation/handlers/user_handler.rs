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
use std::sync::Arc;
use tracing::error;

use crate::domain::models::user::UserProfile;
use crate::domain::services::graph_service::DocumentGraph;
use crate::presentation::errors::AppError;

/// 获取当前用户档案
pub async fn me<G: DocumentGraph + 'static>(
    Extension(graph): Extension<Arc<G>>,
) -> Result<Json<UserProfile>, AppError> {
    let profile = graph.current_user().await.inspect_err(|e| {
        error!("Failed to fetch current user profile: {}", e);
    })?;
    Ok(Json(profile))
}
