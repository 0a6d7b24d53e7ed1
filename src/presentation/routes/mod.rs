// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    routing::{get, post},
    Router,
};

use crate::domain::services::graph_service::DocumentGraph;
use crate::presentation::handlers::{auth_handler, list_handler, site_handler, user_handler};

/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes<G: DocumentGraph + 'static>() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let api_routes = Router::new()
        .route(
            "/v1/auth/authorize-url",
            get(auth_handler::authorize_url::<G>),
        )
        .route("/v1/me", get(user_handler::me::<G>))
        .route(
            "/v1/sites/by-name/{name}",
            get(site_handler::get_site_by_name::<G>),
        )
        .route("/v1/sites/{site_id}", get(site_handler::get_site::<G>))
        .route(
            "/v1/sites/{site_id}/lists",
            post(list_handler::provision_list::<G>),
        )
        .route(
            "/v1/sites/{site_id}/lists/by-name/{name}",
            get(list_handler::get_list_by_name::<G>),
        )
        .route(
            "/v1/sites/{site_id}/lists/{list_id}/items",
            post(list_handler::add_item::<G>),
        );

    Router::new().merge(public_routes).merge(api_routes)
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
