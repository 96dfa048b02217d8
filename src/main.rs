use presign_server::config::Config;
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::LocalTime;

/// Lambda 运行时设置的环境变量
const LAMBDA_RUNTIME_API_VAR: &str = "AWS_LAMBDA_RUNTIME_API";

/// 初始化日志。
///
/// CloudWatch 会为每行日志加时间戳，因此 Lambda 中不输出时间和颜色。
fn init_tracing(in_lambda: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if in_lambda {
        builder.without_time().with_ansi(false).init();
    } else {
        builder.with_timer(LocalTime::rfc_3339()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let in_lambda = env::var_os(LAMBDA_RUNTIME_API_VAR).is_some();

    // 本地开发时加载 .env 文件
    if !in_lambda {
        dotenvy::dotenv().ok();
    }
    init_tracing(in_lambda);

    let config = Config::from_env()?;
    info!(
        region = %config.region,
        allowed_buckets = %config.allowed_buckets,
        endpoint = config.endpoint.as_deref(),
        "configuration loaded"
    );

    let listen_addr = config.listen_addr.clone();
    let app = presign_server::app(presign_server::build_state(config).await);

    if in_lambda {
        lambda_http::run(app).await.map_err(|e| anyhow::anyhow!(e))?;
    } else {
        let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
        info!("服务器运行在 http://{}", listen_addr);
        axum::serve(listener, app).await?;
    }

    Ok(())
}
