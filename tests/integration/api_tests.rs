// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

/// 测试健康检查端点
#[tokio::test]
async fn test_health_check() {
    let app = create_test_app().await;

    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "OK");
}

/// 测试版本信息端点
#[tokio::test]
async fn test_version() {
    let app = create_test_app().await;

    let response = app.server.get("/v1/version").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), env!("CARGO_PKG_VERSION"));
}

/// 测试授权地址包含全部必需参数
///
/// 验证租户、客户端标识、回调地址与权限范围四个配置均进入查询串
#[tokio::test]
async fn test_authorize_url_carries_required_parameters() {
    let app = create_test_app().await;

    let response = app.server.get("/v1/auth/authorize-url").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    let url = body["authorize_url"].as_str().unwrap();
    assert!(url.contains("/test-tenant/oauth2/v2.0/authorize?"));
    assert!(url.contains("client_id=test-client"));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("redirect_uri="));
    assert!(url.contains("scope="));
}

/// 测试按标识符获取站点时标识符原样往返
#[tokio::test]
async fn test_get_site_by_id_round_trips_identifier() {
    let app = create_test_app().await;
    let site_id = "contoso.example.com,5f7a,81a8";

    Mock::given(method("GET"))
        .and(path(format!("/v1.0/sites/{}", site_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": site_id,
            "displayName": "Team Site",
            "webUrl": "https://contoso.example.com/sites/team-site"
        })))
        .mount(&app.remote)
        .await;

    let response = app
        .server
        .get(&format!("/v1/sites/{}", site_id))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["id"], site_id);
}

/// 测试携带Bearer令牌时委托令牌被转发给远程API
#[tokio::test]
async fn test_get_site_with_bearer_forwards_delegated_token() {
    let app = create_test_app().await;

    Mock::given(method("GET"))
        .and(path("/v1.0/sites/site-1"))
        .and(header("authorization", "Bearer caller-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "site-1"})))
        .expect(1)
        .mount(&app.remote)
        .await;

    let response = app
        .server
        .get("/v1/sites/site-1")
        .add_header("Authorization", "Bearer caller-token")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

/// 测试按显示名称查找站点
#[tokio::test]
async fn test_get_site_by_name() {
    let app = create_test_app().await;

    Mock::given(method("GET"))
        .and(path("/v1.0/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [
                {"id": "s1", "displayName": "Finance"},
                {"id": "s2", "displayName": "Marketing"}
            ]
        })))
        .mount(&app.remote)
        .await;

    let response = app.server.get("/v1/sites/by-name/Marketing").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["id"], "s2");

    let response = app.server.get("/v1/sites/by-name/Engineering").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

/// 测试按显示名称查找列表，不存在时返回空结果而非错误
#[tokio::test]
async fn test_get_list_by_name_absent_returns_empty_result() {
    let app = create_test_app().await;

    Mock::given(method("GET"))
        .and(path("/v1.0/sites/site-1/lists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{"id": "l1", "displayName": "Documents"}]
        })))
        .mount(&app.remote)
        .await;

    let response = app
        .server
        .get("/v1/sites/site-1/lists/by-name/Books")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert!(body["list"].is_null());
}

/// 测试开通列表执行创建加两次插入
#[tokio::test]
async fn test_provision_list_success() {
    let app = create_test_app().await;

    Mock::given(method("POST"))
        .and(path("/v1.0/sites/site-1/lists"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "list-9",
            "displayName": "Books"
        })))
        .expect(1)
        .mount(&app.remote)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1.0/sites/site-1/lists/list-9/items"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "1",
            "fields": {"Title": "My Book", "Author": "Unknown", "PageCount": 100}
        })))
        .expect(2)
        .mount(&app.remote)
        .await;

    let response = app
        .server
        .post("/v1/sites/site-1/lists")
        .json(&json!({}))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["list"]["id"], "list-9");
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
}

/// 测试开通列表的参数验证
#[tokio::test]
async fn test_provision_list_validation() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/v1/sites/site-1/lists")
        .json(&json!({"display_name": ""}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

/// 测试创建失败时不再发起后续插入，错误映射为网关错误
#[tokio::test]
async fn test_provision_list_create_failure_short_circuits() {
    let app = create_test_app().await;

    Mock::given(method("POST"))
        .and(path("/v1.0/sites/site-1/lists"))
        .respond_with(ResponseTemplate::new(403).set_body_string("accessDenied"))
        .expect(1)
        .mount(&app.remote)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1.0/sites/site-1/lists/list-9/items"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "1"})))
        .expect(0)
        .mount(&app.remote)
        .await;

    let response = app
        .server
        .post("/v1/sites/site-1/lists")
        .json(&json!({}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
}

/// 测试向既有列表追加列表项
#[tokio::test]
async fn test_add_item_to_existing_list() {
    let app = create_test_app().await;

    Mock::given(method("POST"))
        .and(path("/v1.0/sites/site-1/lists/list-9/items"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "7",
            "fields": {"Title": "A Study", "Author": "Someone", "PageCount": 321}
        })))
        .expect(1)
        .mount(&app.remote)
        .await;

    let response = app
        .server
        .post("/v1/sites/site-1/lists/list-9/items")
        .json(&json!({
            "item": {"title": "A Study", "author": "Someone", "page_count": 321}
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["id"], "7");
}

/// 测试获取当前用户档案
#[tokio::test]
async fn test_get_current_user() {
    let app = create_test_app().await;

    Mock::given(method("GET"))
        .and(path("/v1.0/me"))
        .and(header("authorization", "Bearer test-app-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "user-1",
            "displayName": "Ada Lovelace",
            "mail": "ada@contoso.example.com"
        })))
        .mount(&app.remote)
        .await;

    let response = app.server.get("/v1/me").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["displayName"], "Ada Lovelace");
}

/// 测试远程站点不存在时映射为404
#[tokio::test]
async fn test_remote_not_found_maps_to_404() {
    let app = create_test_app().await;

    Mock::given(method("GET"))
        .and(path("/v1.0/sites/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"code": "itemNotFound"}
        })))
        .mount(&app.remote)
        .await;

    let response = app.server.get("/v1/sites/missing").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
