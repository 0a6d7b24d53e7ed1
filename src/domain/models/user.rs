// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 用户档案实体
///
/// 远程API返回的当前用户信息
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// 用户唯一标识符
    pub id: String,
    /// 用户显示名称
    #[serde(default)]
    pub display_name: Option<String>,
    /// 用户邮箱
    #[serde(default)]
    pub mail: Option<String>,
    /// 用户主体名称
    #[serde(default)]
    pub user_principal_name: Option<String>,
}
