// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod auth_handler;
pub mod list_handler;
pub mod site_handler;
pub mod user_handler;

use axum::http::{header, HeaderMap};

use crate::infrastructure::auth::token_provider::AuthFlow;

/// 根据请求头选择令牌获取方式
///
/// 携带Bearer令牌的请求走委托方式，否则走应用凭据方式
pub(crate) fn flow_from_headers(headers: &HeaderMap) -> AuthFlow {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| AuthFlow::Delegated {
            access_token: token.to_string(),
        })
        .unwrap_or(AuthFlow::Application)
}
