use crate::error::SignError;
use async_trait::async_trait;
use aws_sdk_s3::{Client, error::DisplayErrorContext, presigning::PresigningConfig};
use std::time::Duration;
use tracing::{debug, error};

/// 预签名 URL 的有效期（10 分钟）
pub const PRESIGN_EXPIRY: Duration = Duration::from_secs(10 * 60);

/// 为存储对象签发只读的预签名 URL。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlSigner: Send + Sync {
    /// 为 `bucket` 中的 `key` 生成 GET 预签名 URL。
    ///
    /// # Errors
    ///
    /// 当键为空或 SDK 无法完成签名时返回错误。
    async fn presign_get(&self, bucket: &str, key: &str) -> Result<String, SignError>;
}

/// 基于 `aws-sdk-s3` 的签名实现。
///
/// 凭证由客户端配置的默认凭证链提供，在 Lambda 中即执行角色。
#[derive(Debug, Clone)]
pub struct S3UrlSigner {
    client: Client,
    expires_in: Duration,
}

impl S3UrlSigner {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            expires_in: PRESIGN_EXPIRY,
        }
    }
}

#[async_trait]
impl UrlSigner for S3UrlSigner {
    async fn presign_get(&self, bucket: &str, key: &str) -> Result<String, SignError> {
        if key.is_empty() {
            return Err(SignError::EmptyKey);
        }

        // 有效期从调用时刻开始计算
        let presigning_config = PresigningConfig::expires_in(self.expires_in)?;

        let presigned_request = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .presigned(presigning_config)
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                error!(bucket, key, error = %message, "failed to sign request");
                SignError::Sdk(message)
            })?;

        debug!(bucket, key, "presigned url issued");
        Ok(presigned_request.uri().to_string())
    }
}
