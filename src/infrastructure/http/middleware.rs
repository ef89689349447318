//! HTTP Middleware
//!
//! - 状态码错误日志中间件
//! - Token 鉴权中间件

use axum::{
    extract::{Query, Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use super::error::ApiError;
use crate::auth::{TokenService, VerifyError};
use crate::domain::ErrorCode;

/// HTTP 状态码错误日志中间件
///
/// 拦截 HTTP 响应，当状态码为 4xx 或 5xx 时记录日志
/// 注意：业务错误码在 ApiError::into_response() 中记录
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let latency_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            latency_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            latency_ms,
            "HTTP client error"
        );
    }

    response
}

/// 已通过鉴权的调用方，由鉴权中间件写入请求扩展
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedApp {
    pub app_key: String,
}

/// Token 鉴权中间件
///
/// Token 来源：`Authorization` 头（可带 `Bearer ` 前缀）优先，其次是 `token` 查询参数。
/// 失败一律返回 401，code 区分缺失、格式错误、签名错误与过期。
pub async fn auth_middleware(
    State(tokens): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = extract_token(&request) else {
        return ApiError::unauthorized(ErrorCode::InvalidParams, "missing token").into_response();
    };

    match tokens.verify(&token) {
        Ok(app_key) => {
            request
                .extensions_mut()
                .insert(AuthenticatedApp { app_key });
            next.run(request).await
        }
        Err(err) => ApiError::unauthorized(code_for(err), err.to_string()).into_response(),
    }
}

fn code_for(err: VerifyError) -> ErrorCode {
    match err {
        VerifyError::Malformed => ErrorCode::Auth,
        VerifyError::SignatureInvalid => ErrorCode::AuthCheckTokenFail,
        VerifyError::Expired => ErrorCode::AuthCheckTokenTimeout,
    }
}

fn extract_token(request: &Request) -> Option<String> {
    let from_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(strip_bearer)
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    from_header.or_else(|| {
        Query::<HashMap<String, String>>::try_from_uri(request.uri())
            .ok()
            .and_then(|Query(mut query)| query.remove("token"))
            .filter(|token| !token.is_empty())
    })
}

/// 去掉 `Bearer` 认证方案（大小写不敏感）；只有方案没有 token 时得到空串
fn strip_bearer(value: &str) -> &str {
    let value = value.trim();
    match value.get(..6) {
        Some(scheme) if scheme.eq_ignore_ascii_case("bearer") => {
            let rest = &value[6..];
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                rest.trim()
            } else {
                value
            }
        }
        _ => value,
    }
}
