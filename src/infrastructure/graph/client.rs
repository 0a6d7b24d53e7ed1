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
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::settings::GraphSettings;
use crate::domain::models::list::{ListItem, ListResource, NewList};
use crate::domain::models::site::Site;
use crate::domain::models::user::UserProfile;
use crate::utils::errors::GraphError;

/// 集合响应包装
///
/// 远程API的集合响应统一包裹在 `value` 字段中
#[derive(Debug, Deserialize)]
struct Collection<T> {
    value: Vec<T>,
}

/// 远程文档API客户端
///
/// 基于reqwest封装站点、列表、列表项和用户档案的REST调用。
/// 每个操作接收访问令牌，不做重试与缓存。
pub struct GraphClient {
    http: reqwest::Client,
    base_url: String,
}

impl GraphClient {
    pub fn new(settings: &GraphSettings, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// 根据标识符获取站点
    ///
    /// # 参数
    ///
    /// * `token` - 访问令牌
    /// * `site_id` - 站点标识符
    ///
    /// # 返回值
    ///
    /// * `Ok(Site)` - 站点资源
    /// * `Err(GraphError)` - 调用失败
    pub async fn get_site(&self, token: &str, site_id: &str) -> Result<Site, GraphError> {
        counter!("listbridge_graph_requests_total", "operation" => "get_site").increment(1);
        self.get_json(token, &format!("/v1.0/sites/{}", site_id))
            .await
    }

    /// 枚举可见站点
    pub async fn list_sites(&self, token: &str) -> Result<Vec<Site>, GraphError> {
        counter!("listbridge_graph_requests_total", "operation" => "list_sites").increment(1);
        let collection: Collection<Site> = self.get_json(token, "/v1.0/sites?search=*").await?;
        Ok(collection.value)
    }

    /// 枚举站点下的列表
    pub async fn list_lists(
        &self,
        token: &str,
        site_id: &str,
    ) -> Result<Vec<ListResource>, GraphError> {
        counter!("listbridge_graph_requests_total", "operation" => "list_lists").increment(1);
        let collection: Collection<ListResource> = self
            .get_json(token, &format!("/v1.0/sites/{}/lists", site_id))
            .await?;
        Ok(collection.value)
    }

    /// 获取当前用户档案
    pub async fn get_me(&self, token: &str) -> Result<UserProfile, GraphError> {
        counter!("listbridge_graph_requests_total", "operation" => "get_me").increment(1);
        self.get_json(token, "/v1.0/me").await
    }

    /// 在站点下创建列表
    ///
    /// # 参数
    ///
    /// * `token` - 访问令牌
    /// * `site_id` - 站点标识符
    /// * `new_list` - 新列表定义
    ///
    /// # 返回值
    ///
    /// * `Ok(ListResource)` - 创建后的列表资源
    /// * `Err(GraphError)` - 调用失败
    pub async fn create_list(
        &self,
        token: &str,
        site_id: &str,
        new_list: &NewList,
    ) -> Result<ListResource, GraphError> {
        counter!("listbridge_graph_requests_total", "operation" => "create_list").increment(1);
        self.post_json(token, &format!("/v1.0/sites/{}/lists", site_id), new_list)
            .await
    }

    /// 向列表追加一条列表项
    ///
    /// 字段集合原样提交，远程API负责校验
    pub async fn add_list_item(
        &self,
        token: &str,
        site_id: &str,
        list_id: &str,
        fields: &Value,
    ) -> Result<ListItem, GraphError> {
        counter!("listbridge_graph_requests_total", "operation" => "add_list_item").increment(1);
        let body = serde_json::json!({ "fields": fields });
        self.post_json(
            token,
            &format!("/v1.0/sites/{}/lists/{}/items", site_id, list_id),
            &body,
        )
        .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
    ) -> Result<T, GraphError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.http.get(&url).bearer_auth(token).send().await?;
        Self::decode(response).await
    }

    async fn post_json<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
        body: &B,
    ) -> Result<T, GraphError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, GraphError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GraphError::RemoteStatus {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| GraphError::Decode(e.to_string()))
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
