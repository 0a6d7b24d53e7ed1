// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 列表实体
///
/// 站点内的列表资源，由远程API创建后返回
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResource {
    /// 列表唯一标识符
    pub id: String,
    /// 列表显示名称
    #[serde(default)]
    pub display_name: Option<String>,
    /// 列表描述
    #[serde(default)]
    pub description: Option<String>,
    /// 列表访问地址
    #[serde(default)]
    pub web_url: Option<String>,
}

impl ListResource {
    /// 判断列表显示名称是否与给定名称一致
    pub fn has_display_name(&self, name: &str) -> bool {
        self.display_name.as_deref() == Some(name)
    }
}

/// 列表项实体
///
/// 列表内的单条记录，`fields` 原样承载远程API的字段集合
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    /// 列表项唯一标识符
    pub id: String,
    /// 字段集合
    #[serde(default)]
    pub fields: Option<Value>,
}

/// 文本列定义
///
/// 远程API以空对象区分列类型
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextColumn {}

/// 数值列定义
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NumberColumn {}

/// 列定义
///
/// 创建列表时提交的列描述，`text` 与 `number` 互斥
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// 列名称
    pub name: String,
    /// 文本列标记
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextColumn>,
    /// 数值列标记
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<NumberColumn>,
}

impl ColumnDefinition {
    /// 构造文本列
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(TextColumn {}),
            number: None,
        }
    }

    /// 构造数值列
    pub fn number(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            number: Some(NumberColumn {}),
        }
    }
}

/// 列表模板信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListInfo {
    /// 模板类型
    pub template: String,
}

/// 新建列表请求体
///
/// 序列化为远程API创建列表的JSON负载
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewList {
    /// 列表显示名称
    pub display_name: String,
    /// 列定义集合
    pub columns: Vec<ColumnDefinition>,
    /// 模板信息
    pub list: ListInfo,
}

impl NewList {
    /// 构造通用模板的新列表
    pub fn generic(display_name: impl Into<String>, columns: Vec<ColumnDefinition>) -> Self {
        Self {
            display_name: display_name.into(),
            columns,
            list: ListInfo {
                template: "genericList".to_string(),
            },
        }
    }
}
