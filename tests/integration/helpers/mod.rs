// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Extension;
use axum_test::TestServer;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use listbridge::config::settings::{AuthSettings, GraphSettings};
use listbridge::domain::services::graph_service::GraphService;
use listbridge::infrastructure::auth::token_provider::TokenProvider;
use listbridge::infrastructure::graph::client::GraphClient;
use listbridge::presentation::routes;

/// 测试应用
///
/// `remote` 同时扮演身份提供方与远程文档API
pub struct TestApp {
    pub server: TestServer,
    pub remote: MockServer,
}

/// 创建测试应用
///
/// 路由与生产环境一致，远程依赖指向mock服务器，
/// 并预置一个始终成功的令牌端点
pub async fn create_test_app() -> TestApp {
    let remote = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/test-tenant/oauth2/v2.0/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token_type": "Bearer",
            "expires_in": 3599,
            "access_token": "test-app-token"
        })))
        .mount(&remote)
        .await;

    let auth = AuthSettings {
        tenant_id: "test-tenant".to_string(),
        client_id: "test-client".to_string(),
        client_secret: "test-secret".to_string(),
        callback_url: "http://localhost:3000/auth/callback".to_string(),
        scope: "https://graph.example.com/.default".to_string(),
        authority_base_url: remote.uri(),
    };
    let graph = GraphSettings {
        base_url: remote.uri(),
        timeout_secs: 5,
    };

    let http = reqwest::Client::new();
    let service = Arc::new(GraphService::new(
        TokenProvider::new(auth, http.clone()),
        GraphClient::new(&graph, http),
    ));

    let app = routes::routes::<GraphService>().layer(Extension(service));
    let server = TestServer::new(app).expect("failed to start test server");

    TestApp { server, remote }
}
