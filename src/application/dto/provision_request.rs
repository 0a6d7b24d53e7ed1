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

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::services::graph_service::{ListProvisionSpec, SeedItem};

/// 种子列表项数据传输对象
///
/// 三个字段均可省略，缺省时使用默认种子项
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct SeedItemDto {
    /// 标题
    #[validate(length(min = 1))]
    pub title: Option<String>,
    /// 作者
    #[validate(length(min = 1))]
    pub author: Option<String>,
    /// 页数
    pub page_count: Option<i64>,
}

impl SeedItemDto {
    /// 与默认种子项合并
    pub fn into_seed(self) -> SeedItem {
        let defaults = SeedItem::default();
        SeedItem {
            title: self.title.unwrap_or(defaults.title),
            author: self.author.unwrap_or(defaults.author),
            page_count: self.page_count.unwrap_or(defaults.page_count),
        }
    }
}

/// 列表开通请求数据传输对象
///
/// 封装创建列表所需的显示名称、列名与种子项，全部可省略
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct ProvisionListDto {
    /// 列表显示名称
    #[validate(length(min = 1))]
    pub display_name: Option<String>,
    /// 文本列名称
    #[validate(length(min = 1))]
    pub text_column: Option<String>,
    /// 数值列名称
    #[validate(length(min = 1))]
    pub number_column: Option<String>,
    /// 种子列表项
    #[validate(nested)]
    pub item: Option<SeedItemDto>,
}

impl ProvisionListDto {
    /// 转换为领域层开通规格，缺省字段取默认值
    pub fn into_spec(self) -> ListProvisionSpec {
        let defaults = ListProvisionSpec::default();
        ListProvisionSpec {
            display_name: self.display_name.unwrap_or(defaults.display_name),
            text_column: self.text_column.unwrap_or(defaults.text_column),
            number_column: self.number_column.unwrap_or(defaults.number_column),
            seed: self.item.map(SeedItemDto::into_seed).unwrap_or(defaults.seed),
        }
    }
}
