//! Request Extractors
//!
//! 把查询串与 urlencoded 表单体合并为一张原始参数表，交给校验层处理

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Query, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    Form,
};

use super::error::ApiError;
use crate::domain::validation::FieldRule;
use crate::domain::{validate, Bound, RawParams};

/// 原始请求参数
///
/// 查询串在前，表单体在后；同名字段以表单体为准。
/// 必须作为处理器的最后一个提取器（会消费请求体）。
#[derive(Debug, Default)]
pub struct Params(pub RawParams);

impl Params {
    /// 以 `/:id` 形式出现的路径参数也纳入校验
    pub fn with_path_id(mut self, id: String) -> Self {
        self.0.insert("id", id);
        self
    }
}

#[async_trait]
impl<S> FromRequest<S> for Params
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut params = RawParams::new();

        if req.uri().query().is_some() {
            let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(req.uri())
                .map_err(|e| malformed("query", e.body_text()))?;
            params.extend(pairs);
        }

        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.starts_with("application/x-www-form-urlencoded"))
            .unwrap_or(false);

        if is_form {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| malformed("body", e.body_text()))?;
            params.extend(pairs);
        }

        Ok(Params(params))
    }
}

/// 参数无法解码时按参数错误处理
fn malformed(source: &'static str, detail: String) -> ApiError {
    ApiError::malformed(StatusCode::BAD_REQUEST, format!("{}: {}", source, detail))
}

/// 校验参数，失败时以给定的 HTTP 状态返回 INVALID_PARAMS
pub fn bind(
    params: &RawParams,
    rules: &[FieldRule],
    status: StatusCode,
) -> Result<Bound, ApiError> {
    validate(params, rules)
        .into_result()
        .map_err(|result| ApiError::invalid(status, result))
}
