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

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::domain::models::list::{ColumnDefinition, ListItem, ListResource, NewList};
use crate::domain::models::site::Site;
use crate::domain::models::user::UserProfile;
use crate::infrastructure::auth::token_provider::{AuthFlow, TokenProvider};
use crate::infrastructure::graph::client::GraphClient;
use crate::utils::errors::ServiceError;

/// 种子列表项
///
/// 固定三个字段：标题、作者、页数，原样转发给远程API
#[derive(Debug, Clone, Serialize)]
pub struct SeedItem {
    /// 标题
    pub title: String,
    /// 作者
    pub author: String,
    /// 页数
    pub page_count: i64,
}

impl Default for SeedItem {
    fn default() -> Self {
        Self {
            title: "My Book".to_string(),
            author: "Unknown".to_string(),
            page_count: 100,
        }
    }
}

impl SeedItem {
    /// 按给定列名构造远程API字段集合
    pub fn fields(&self, text_column: &str, number_column: &str) -> Value {
        serde_json::json!({
            "Title": self.title,
            text_column: self.author,
            number_column: self.page_count,
        })
    }
}

/// 列表开通规格
///
/// 描述待创建列表的显示名称、两个类型化列与种子项
#[derive(Debug, Clone)]
pub struct ListProvisionSpec {
    /// 列表显示名称
    pub display_name: String,
    /// 文本列名称
    pub text_column: String,
    /// 数值列名称
    pub number_column: String,
    /// 种子列表项
    pub seed: SeedItem,
}

impl Default for ListProvisionSpec {
    fn default() -> Self {
        Self {
            display_name: "Books".to_string(),
            text_column: "Author".to_string(),
            number_column: "PageCount".to_string(),
            seed: SeedItem::default(),
        }
    }
}

/// 列表开通结果
#[derive(Debug, Clone, Serialize)]
pub struct ProvisionedList {
    /// 创建的列表
    pub list: ListResource,
    /// 插入的列表项
    pub items: Vec<ListItem>,
}

/// 文档图服务特质
///
/// 定义对远程文档管理API的领域操作接口
#[async_trait]
pub trait DocumentGraph: Send + Sync {
    /// 拼装授权端点地址
    fn authorize_url(&self) -> String;
    /// 根据标识符获取站点
    async fn site_by_id(&self, flow: &AuthFlow, site_id: &str) -> Result<Site, ServiceError>;
    /// 根据显示名称查找站点
    async fn site_by_name(&self, name: &str) -> Result<Option<Site>, ServiceError>;
    /// 根据显示名称查找站点下的列表
    async fn list_by_name(
        &self,
        site_id: &str,
        name: &str,
    ) -> Result<Option<ListResource>, ServiceError>;
    /// 获取当前用户档案
    async fn current_user(&self) -> Result<UserProfile, ServiceError>;
    /// 开通列表：创建列表并插入两条种子项
    async fn provision_list(
        &self,
        flow: &AuthFlow,
        site_id: &str,
        spec: ListProvisionSpec,
    ) -> Result<ProvisionedList, ServiceError>;
    /// 向既有列表追加一条种子项
    async fn add_item(
        &self,
        flow: &AuthFlow,
        site_id: &str,
        list_id: &str,
        spec: &ListProvisionSpec,
    ) -> Result<ListItem, ServiceError>;
}

/// 文档图服务
///
/// 组合令牌提供器与远程API客户端。每个操作按需获取令牌，
/// 无缓存、无重试；开通序列的三次远程调用严格按序执行，
/// 前序失败时后续调用不再发起，已产生的远端效果不回滚。
pub struct GraphService {
    tokens: TokenProvider,
    client: GraphClient,
}

impl GraphService {
    pub fn new(tokens: TokenProvider, client: GraphClient) -> Self {
        Self { tokens, client }
    }
}

#[async_trait]
impl DocumentGraph for GraphService {
    fn authorize_url(&self) -> String {
        self.tokens.authorize_url()
    }

    async fn site_by_id(&self, flow: &AuthFlow, site_id: &str) -> Result<Site, ServiceError> {
        let token = self.tokens.acquire(flow).await?;
        let site = self.client.get_site(&token.access_token, site_id).await?;
        Ok(site)
    }

    async fn site_by_name(&self, name: &str) -> Result<Option<Site>, ServiceError> {
        let token = self.tokens.acquire(&AuthFlow::Application).await?;
        let sites = self.client.list_sites(&token.access_token).await?;
        Ok(sites.into_iter().find(|site| site.has_display_name(name)))
    }

    async fn list_by_name(
        &self,
        site_id: &str,
        name: &str,
    ) -> Result<Option<ListResource>, ServiceError> {
        let token = self.tokens.acquire(&AuthFlow::Application).await?;
        let lists = self.client.list_lists(&token.access_token, site_id).await?;
        Ok(lists.into_iter().find(|list| list.has_display_name(name)))
    }

    async fn current_user(&self) -> Result<UserProfile, ServiceError> {
        let token = self.tokens.acquire(&AuthFlow::Application).await?;
        let profile = self.client.get_me(&token.access_token).await?;
        Ok(profile)
    }

    async fn provision_list(
        &self,
        flow: &AuthFlow,
        site_id: &str,
        spec: ListProvisionSpec,
    ) -> Result<ProvisionedList, ServiceError> {
        let token = self.tokens.acquire(flow).await?;

        let new_list = NewList::generic(
            spec.display_name.clone(),
            vec![
                ColumnDefinition::text(spec.text_column.clone()),
                ColumnDefinition::number(spec.number_column.clone()),
            ],
        );
        let list = self
            .client
            .create_list(&token.access_token, site_id, &new_list)
            .await?;
        info!("Created list {} in site {}", list.id, site_id);

        let fields = spec.seed.fields(&spec.text_column, &spec.number_column);
        let first = self
            .client
            .add_list_item(&token.access_token, site_id, &list.id, &fields)
            .await?;

        // The second insert goes through the standalone item operation,
        // which re-acquires its own token
        let second = self.add_item(flow, site_id, &list.id, &spec).await?;

        Ok(ProvisionedList {
            list,
            items: vec![first, second],
        })
    }

    async fn add_item(
        &self,
        flow: &AuthFlow,
        site_id: &str,
        list_id: &str,
        spec: &ListProvisionSpec,
    ) -> Result<ListItem, ServiceError> {
        let token = self.tokens.acquire(flow).await?;
        let fields = spec.seed.fields(&spec.text_column, &spec.number_column);
        let item = self
            .client
            .add_list_item(&token.access_token, site_id, list_id, &fields)
            .await?;
        Ok(item)
    }
}

#[cfg(test)]
#[path = "graph_service_test.rs"]
mod tests;
