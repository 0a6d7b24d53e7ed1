// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 站点实体
///
/// 远程文档管理API中的站点资源。站点是列表的容器，
/// 通过标识符或显示名称定位。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    /// 站点唯一标识符
    pub id: String,
    /// 站点显示名称
    #[serde(default)]
    pub display_name: Option<String>,
    /// 站点内部名称
    #[serde(default)]
    pub name: Option<String>,
    /// 站点访问地址
    #[serde(default)]
    pub web_url: Option<String>,
    /// 创建时间
    #[serde(default)]
    pub created_date_time: Option<DateTime<Utc>>,
}

impl Site {
    /// 判断站点显示名称是否与给定名称一致
    pub fn has_display_name(&self, name: &str) -> bool {
        self.display_name.as_deref() == Some(name)
    }
}
