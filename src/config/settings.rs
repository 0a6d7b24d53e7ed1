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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、身份提供方和远程文档API等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 身份提供方配置
    pub auth: AuthSettings,
    /// 远程文档API配置
    pub graph: GraphSettings,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 身份提供方配置设置
///
/// 对应OAuth2应用注册的四个字符串配置，外加目标API的权限范围
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// 租户标识
    pub tenant_id: String,
    /// 客户端标识
    pub client_id: String,
    /// 客户端密钥
    pub client_secret: String,
    /// 授权回调地址
    pub callback_url: String,
    /// 目标API权限范围
    pub scope: String,
    /// 身份提供方根地址
    pub authority_base_url: String,
}

/// 远程文档API配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct GraphSettings {
    /// 远程API根地址
    pub base_url: String,
    /// HTTP请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default identity provider settings
            .set_default("auth.tenant_id", "common")?
            .set_default("auth.client_id", "")?
            .set_default("auth.client_secret", "")?
            .set_default("auth.callback_url", "http://localhost:3000/auth/callback")?
            .set_default("auth.scope", "https://graph.microsoft.com/.default")?
            .set_default(
                "auth.authority_base_url",
                "https://login.microsoftonline.com",
            )?
            // Default remote API settings
            .set_default("graph.base_url", "https://graph.microsoft.com")?
            .set_default("graph.timeout_secs", 30)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("LISTBRIDGE").separator("__"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
