// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 认证层错误类型
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("身份提供方拒绝了令牌请求: {status}: {body}")]
    TokenRejected { status: u16, body: String },

    #[error("无法连接身份提供方: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("令牌响应格式无效: {0}")]
    MalformedResponse(String),

    #[error("缺少委托访问令牌")]
    MissingDelegatedToken,
}

/// 远程文档API错误类型
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("远程API返回 {status}: {body}")]
    RemoteStatus { status: u16, body: String },

    #[error("无法连接远程API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("响应结构无效: {0}")]
    Decode(String),
}

impl GraphError {
    /// 判断错误是否为远程资源不存在
    pub fn is_not_found(&self) -> bool {
        matches!(self, GraphError::RemoteStatus { status: 404, .. })
    }
}

/// 领域服务错误类型
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("认证失败: {0}")]
    Auth(#[from] AuthError),

    #[error("远程调用失败: {0}")]
    Graph(#[from] GraphError),
}
