//! 预签名 URL 服务库
//!
//! 校验共享密钥和存储桶允许列表后，为 S3 对象签发 10 分钟有效的
//! GET 预签名 URL。同一个 Axum Router 既可以由 `lambda_http` 驱动运行在
//! Lambda 中，也可以在本地直接监听端口。

pub mod config;
pub mod error;
pub mod handlers;
pub mod utils;

use config::Config;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utils::s3::{S3UrlSigner, UrlSigner};

/// 处理器共享的只读状态
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub signer: Arc<dyn UrlSigner>,
}

impl AppState {
    pub fn new(config: Config, signer: Arc<dyn UrlSigner>) -> Self {
        Self {
            config: Arc::new(config),
            signer,
        }
    }
}

/// 根据配置创建 S3 客户端并构建应用状态。
pub async fn build_state(config: Config) -> AppState {
    let s3_client = crate::config::create_s3_client(&config).await;
    AppState::new(config, Arc::new(S3UrlSigner::new(s3_client)))
}

/// 创建并配置Axum应用程序
///
/// 所有请求都交给预签名处理器，与网关的 `$default` 路由行为一致。
///
/// # Returns
///
/// 返回配置好的Axum Router实例
pub fn app(state: AppState) -> axum::Router {
    axum::Router::new()
        .fallback(handlers::handle_presign)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
