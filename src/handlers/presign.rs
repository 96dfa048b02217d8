use super::constants::{API_KEY_PARAM, BUCKET_PARAM, KEY_PARAM};
use crate::AppState;
use crate::error::PresignError;
use axum::{
    extract::{Extension, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lambda_http::request::RequestContext;
use std::collections::HashMap;
use tracing::{info, warn};

/// 网关传入的调用方信息，仅用于日志。
#[derive(Debug, Default)]
struct Caller {
    request_id: Option<String>,
    source_ip: Option<String>,
}

impl From<&RequestContext> for Caller {
    fn from(context: &RequestContext) -> Self {
        match context {
            RequestContext::ApiGatewayV2(ctx) => Self {
                request_id: ctx.request_id.clone(),
                source_ip: ctx.http.source_ip.clone(),
            },
            RequestContext::ApiGatewayV1(ctx) => Self {
                request_id: ctx.request_id.clone(),
                source_ip: ctx.identity.source_ip.clone(),
            },
            _ => Self::default(),
        }
    }
}

/// 处理预签名请求。
///
/// 依次校验 `apiKey`、`bucket`、`key` 查询参数，全部通过后返回
/// 状态码 200 和预签名 URL。任何失败都返回 500 和错误说明。
///
/// # 参数
///
/// * `State(state)` - 应用状态。
/// * `context` - Lambda 模式下网关提供的请求上下文，本地模式下为空。
/// * `query` - 查询参数。
///
/// # 返回值
///
/// 响应体为预签名 URL 或错误说明的 HTTP 响应。
pub async fn handle_presign(
    State(state): State<AppState>,
    context: Option<Extension<RequestContext>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let caller = context
        .as_ref()
        .map(|Extension(ctx)| Caller::from(ctx))
        .unwrap_or_default();

    // 无法解析的查询串按无参数处理，后续校验会给出对应错误
    let params = match query {
        Ok(Query(pairs)) => merge_params(pairs),
        Err(e) => {
            warn!(error = %e, "failed to parse query string");
            HashMap::new()
        }
    };

    info!(
        request_id = caller.request_id.as_deref(),
        source_ip = caller.source_ip.as_deref(),
        bucket = params.get(BUCKET_PARAM).map(String::as_str),
        key = params.get(KEY_PARAM).map(String::as_str),
        has_api_key = params.contains_key(API_KEY_PARAM),
        "presign request"
    );

    match presign(&state, &params).await {
        Ok(url) => {
            info!(
                request_id = caller.request_id.as_deref(),
                "presign request succeeded"
            );
            (StatusCode::OK, url).into_response()
        }
        Err(e) => {
            warn!(
                request_id = caller.request_id.as_deref(),
                error = %e,
                "presign request rejected"
            );
            e.into_response()
        }
    }
}

/// 合并查询参数，重复的参数按出现顺序以逗号连接。
///
/// 与 API Gateway 生成 `queryStringParameters` 的方式一致，
/// 例如 `apiKey=a&apiKey=b` 得到 `"a,b"`。
pub fn merge_params(pairs: Vec<(String, String)>) -> HashMap<String, String> {
    let mut params: HashMap<String, String> = HashMap::new();
    for (name, value) in pairs {
        params
            .entry(name)
            .and_modify(|joined| {
                joined.push(',');
                joined.push_str(&value);
            })
            .or_insert_with(|| value.clone());
    }
    params
}

/// 校验查询参数并签发预签名 URL。
///
/// 校验按顺序进行，遇到第一个失败即返回。存在但为空的参数视为已提供。
///
/// # Errors
///
/// 返回第一个未通过的校验对应的 [`PresignError`]。
pub async fn presign(
    state: &AppState,
    params: &HashMap<String, String>,
) -> Result<String, PresignError> {
    let api_key = params.get(API_KEY_PARAM).ok_or(PresignError::MissingApiKey)?;
    if !state.config.api_key.matches(api_key) {
        return Err(PresignError::PermissionDenied);
    }

    let bucket = params.get(BUCKET_PARAM).ok_or(PresignError::MissingBucket)?;
    if !state.config.allowed_buckets.is_allowed(bucket) {
        return Err(PresignError::ForbiddenBucket);
    }

    let key = params.get(KEY_PARAM).ok_or(PresignError::MissingKey)?;

    let url = state.signer.presign_get(bucket, key).await?;
    Ok(url)
}
