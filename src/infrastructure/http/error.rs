//! HTTP Error Handling
//!
//! 所有失败在处理器边界被翻译成唯一的 ErrorCode；内部错误详情只写日志，不进入响应体。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use std::fmt::Display;

use super::dto::Envelope;
use crate::domain::{ErrorCode, ValidationResult};

/// 失败类别，决定日志级别
#[derive(Debug)]
enum Failure {
    /// 参数校验失败（客户端问题）
    Invalid(ValidationResult),
    /// 参数无法解码
    Malformed(String),
    /// 预期内的业务结果：不存在、已存在等
    Rejected,
    /// 鉴权失败
    Unauthorized(String),
    /// 服务端故障
    Fault(String),
}

/// API 错误
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: ErrorCode,
    failure: Failure,
    empty_object: bool,
}

impl ApiError {
    fn new(status: StatusCode, code: ErrorCode, failure: Failure) -> Self {
        Self {
            status,
            code,
            failure,
            empty_object: false,
        }
    }

    /// 参数校验失败，统一为 INVALID_PARAMS
    pub fn invalid(status: StatusCode, result: ValidationResult) -> Self {
        Self::new(status, ErrorCode::InvalidParams, Failure::Invalid(result))
    }

    /// 查询串或表单体无法解码，同样返回 INVALID_PARAMS
    pub fn malformed(status: StatusCode, detail: impl Into<String>) -> Self {
        Self::new(
            status,
            ErrorCode::InvalidParams,
            Failure::Malformed(detail.into()),
        )
    }

    /// 预期内的业务拒绝
    pub fn rejected(status: StatusCode, code: ErrorCode) -> Self {
        Self::new(status, code, Failure::Rejected)
    }

    /// 鉴权失败，HTTP 401
    pub fn unauthorized(code: ErrorCode, reason: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            code,
            Failure::Unauthorized(reason.into()),
        )
    }

    /// 服务端故障，detail 只写日志
    pub fn fault(status: StatusCode, code: ErrorCode, detail: impl Display) -> Self {
        Self::new(status, code, Failure::Fault(detail.to_string()))
    }

    /// 用于 `map_err` 的故障构造器
    pub fn fault_with<E: Display>(
        status: StatusCode,
        code: ErrorCode,
    ) -> impl FnOnce(E) -> ApiError {
        move |err| ApiError::fault(status, code, err)
    }

    /// 失败时 data 返回 `{}` 而不是 null
    pub fn with_empty_object(mut self) -> Self {
        self.empty_object = true;
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.code.value();

        match &self.failure {
            Failure::Invalid(result) => {
                for violation in result.violations() {
                    tracing::info!(
                        code,
                        field = violation.field,
                        rule = %violation.rule,
                        message = %violation.message,
                        "Invalid request parameter"
                    );
                }
            }
            Failure::Malformed(detail) => {
                tracing::info!(code, detail = %detail, "Malformed request parameters");
            }
            Failure::Rejected => {
                tracing::debug!(code, msg = self.code.message(), "Request rejected");
            }
            Failure::Unauthorized(reason) => {
                tracing::warn!(code, reason = %reason, "Authentication failed");
            }
            Failure::Fault(detail) => {
                tracing::error!(code, error = %detail, "Request failed");
            }
        }

        let data = if self.empty_object {
            Value::Object(Default::default())
        } else {
            Value::Null
        };

        (self.status, Json(Envelope::new(self.code, data))).into_response()
    }
}
