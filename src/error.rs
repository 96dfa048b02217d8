//! 错误类型模块
//!
//! 所有请求级错误统一以 500 状态码返回，响应体为错误的 `Display` 文本。

use aws_sdk_s3::presigning::PresigningConfigError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// 请求校验或签名失败时返回的错误。
///
/// 每个变体的显示文本即为返回给调用方的响应体。
#[derive(Debug, Error)]
pub enum PresignError {
    #[error("apiKey is required")]
    MissingApiKey,

    #[error("permission denied")]
    PermissionDenied,

    #[error("bucket is required")]
    MissingBucket,

    #[error("forbidden bucket")]
    ForbiddenBucket,

    #[error("key is required")]
    MissingKey,

    #[error("failed to sign request")]
    Signing(#[from] SignError),
}

impl PresignError {
    /// 所有错误共用的状态码
    pub const STATUS: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;
}

impl IntoResponse for PresignError {
    fn into_response(self) -> Response {
        (Self::STATUS, self.to_string()).into_response()
    }
}

/// 生成预签名 URL 失败的原因。
#[derive(Debug, Error)]
pub enum SignError {
    #[error("object key must not be empty")]
    EmptyKey,

    #[error("invalid presigning config: {0}")]
    Config(#[from] PresigningConfigError),

    #[error("failed to presign GetObject: {0}")]
    Sdk(String),
}

/// 启动时加载配置失败。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{0} must list at least one bucket")]
    EmptyAllowList(&'static str),
}
