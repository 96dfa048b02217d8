//! 预签名服务的配置模块。
//!
//! 该模块负责在进程启动时从环境变量加载配置，并据此创建 S3 客户端。

use crate::error::ConfigError;
use crate::utils::allow_list::{BucketAllowList, DEFAULT_ALLOWED_BUCKET};
use crate::utils::auth::ApiKey;
use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_s3::Client;
use std::env;

/// 共享密钥
pub const API_KEY_VAR: &str = "PRESIGN_API_KEY";
/// 逗号分隔的允许存储桶列表
pub const ALLOWED_BUCKETS_VAR: &str = "PRESIGN_ALLOWED_BUCKETS";
/// 签名区域
pub const REGION_VAR: &str = "PRESIGN_REGION";
/// S3 兼容服务的端点
pub const ENDPOINT_VAR: &str = "PRESIGN_ENDPOINT";
/// 本地模式监听地址
pub const LISTEN_ADDR_VAR: &str = "PRESIGN_LISTEN_ADDR";

pub const DEFAULT_REGION: &str = "ap-northeast-2";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// 服务配置，启动后不再修改。
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: ApiKey,
    pub allowed_buckets: BucketAllowList,
    pub region: String,
    pub endpoint: Option<String>,
    pub listen_addr: String,
}

impl Config {
    /// 从进程环境变量加载配置。
    ///
    /// # Errors
    ///
    /// 未设置 `PRESIGN_API_KEY` 或允许列表为空时返回错误。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 使用给定的查找函数加载配置。
    ///
    /// 值为空白的变量视为未设置。
    ///
    /// # 参数
    ///
    /// * `lookup` - 根据变量名返回变量值。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = get(API_KEY_VAR)
            .map(ApiKey::new)
            .ok_or(ConfigError::Missing(API_KEY_VAR))?;

        let allowed_buckets = BucketAllowList::from_csv(
            &get(ALLOWED_BUCKETS_VAR).unwrap_or_else(|| DEFAULT_ALLOWED_BUCKET.to_string()),
        );
        if allowed_buckets.is_empty() {
            return Err(ConfigError::EmptyAllowList(ALLOWED_BUCKETS_VAR));
        }

        Ok(Self {
            api_key,
            allowed_buckets,
            region: get(REGION_VAR).unwrap_or_else(|| DEFAULT_REGION.to_string()),
            endpoint: get(ENDPOINT_VAR),
            listen_addr: get(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
        })
    }
}

/// 根据配置创建 S3 客户端。
///
/// 区域固定为配置中的区域；凭证来自默认凭证链（Lambda 执行角色、
/// 环境变量或本地 profile）。设置了端点时启用 path-style 访问，
/// 以兼容 MinIO 等 S3 兼容服务。
///
/// # 返回值
///
/// 配置好的 `aws_sdk_s3::Client`。
pub async fn create_s3_client(config: &Config) -> Client {
    let region_provider = RegionProviderChain::first_try(Some(Region::new(config.region.clone())));

    let mut config_builder =
        aws_config::defaults(BehaviorVersion::latest()).region(region_provider);
    if let Some(endpoint) = &config.endpoint {
        config_builder = config_builder.endpoint_url(endpoint);
    }
    let aws_config = config_builder.load().await;

    let s3_config = aws_sdk_s3::config::Builder::from(&aws_config)
        .force_path_style(config.endpoint.is_some())
        .build();
    Client::from_conf(s3_config)
}
