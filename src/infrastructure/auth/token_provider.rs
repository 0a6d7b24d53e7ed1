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

use metrics::counter;
use serde::Deserialize;
use tracing::debug;

use crate::config::settings::AuthSettings;
use crate::utils::errors::AuthError;

/// 令牌获取方式
///
/// 应用凭据方式使用客户端密钥，委托方式转发调用方携带的令牌
#[derive(Debug, Clone)]
pub enum AuthFlow {
    /// 应用凭据方式
    Application,
    /// 委托方式，携带调用方的访问令牌
    Delegated { access_token: String },
}

/// 访问令牌
///
/// 身份提供方令牌端点的响应体
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    /// 令牌内容
    pub access_token: String,
    /// 令牌类型
    #[serde(default)]
    pub token_type: Option<String>,
    /// 有效期（秒）
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// 令牌提供器
///
/// 封装两种令牌获取策略与授权地址的拼装。
/// 不做缓存与刷新，每次调用按需获取。
pub struct TokenProvider {
    auth: AuthSettings,
    http: reqwest::Client,
}

impl TokenProvider {
    pub fn new(auth: AuthSettings, http: reqwest::Client) -> Self {
        Self { auth, http }
    }

    /// 拼装授权端点地址
    ///
    /// 由租户、客户端标识、回调地址和权限范围四个配置组成，
    /// 查询参数统一URL编码
    ///
    /// # 返回值
    ///
    /// 完整的授权端点URL
    pub fn authorize_url(&self) -> String {
        format!(
            "{}/{}/oauth2/v2.0/authorize?client_id={}&response_type=code&redirect_uri={}&response_mode=query&scope={}",
            self.auth.authority_base_url.trim_end_matches('/'),
            self.auth.tenant_id,
            urlencoding::encode(&self.auth.client_id),
            urlencoding::encode(&self.auth.callback_url),
            urlencoding::encode(&self.auth.scope),
        )
    }

    /// 按指定方式获取访问令牌
    ///
    /// # 参数
    ///
    /// * `flow` - 令牌获取方式
    ///
    /// # 返回值
    ///
    /// * `Ok(AccessToken)` - 获取到的令牌
    /// * `Err(AuthError)` - 获取失败
    pub async fn acquire(&self, flow: &AuthFlow) -> Result<AccessToken, AuthError> {
        match flow {
            AuthFlow::Application => {
                counter!("listbridge_token_requests_total", "flow" => "application").increment(1);
                self.acquire_client_credentials().await
            }
            AuthFlow::Delegated { access_token } => {
                counter!("listbridge_token_requests_total", "flow" => "delegated").increment(1);
                if access_token.trim().is_empty() {
                    return Err(AuthError::MissingDelegatedToken);
                }
                // The caller's token is forwarded as-is, no on-behalf-of exchange
                Ok(AccessToken {
                    access_token: access_token.clone(),
                    token_type: Some("Bearer".to_string()),
                    expires_in: None,
                })
            }
        }
    }

    /// 以客户端凭据方式请求令牌端点
    async fn acquire_client_credentials(&self) -> Result<AccessToken, AuthError> {
        let token_url = format!(
            "{}/{}/oauth2/v2.0/token",
            self.auth.authority_base_url.trim_end_matches('/'),
            self.auth.tenant_id,
        );
        debug!("Requesting client-credential token from {}", token_url);

        let response = self
            .http
            .post(&token_url)
            .form(&[
                ("client_id", self.auth.client_id.as_str()),
                ("client_secret", self.auth.client_secret.as_str()),
                ("scope", self.auth.scope.as_str()),
                ("grant_type", "client_credentials"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::TokenRejected {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<AccessToken>()
            .await
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "token_provider_test.rs"]
mod tests;
