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

use crate::application::dto::provision_request::SeedItemDto;
use crate::domain::services::graph_service::ListProvisionSpec;

/// 追加列表项请求数据传输对象
///
/// 列名决定字段键，与开通时使用的列名保持一致
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct AddItemDto {
    /// 文本列名称
    #[validate(length(min = 1))]
    pub text_column: Option<String>,
    /// 数值列名称
    #[validate(length(min = 1))]
    pub number_column: Option<String>,
    /// 列表项内容
    #[validate(nested)]
    pub item: Option<SeedItemDto>,
}

impl AddItemDto {
    /// 转换为领域层规格，仅列名与种子项有效
    pub fn into_spec(self) -> ListProvisionSpec {
        let defaults = ListProvisionSpec::default();
        ListProvisionSpec {
            display_name: defaults.display_name,
            text_column: self.text_column.unwrap_or(defaults.text_column),
            number_column: self.number_column.unwrap_or(defaults.number_column),
            seed: self.item.map(SeedItemDto::into_seed).unwrap_or(defaults.seed),
        }
    }
}
