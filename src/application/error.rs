//! 应用层错误定义
//!
//! 资源服务统一返回的错误类型

use thiserror::Error;

use crate::application::ports::RepositoryError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound { resource_type: &'static str, id: i64 },

    /// 资源已存在
    #[error("{resource_type} already exists: {key}")]
    Conflict {
        resource_type: &'static str,
        key: String,
    },

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ApplicationError {
    pub fn not_found(resource_type: &'static str, id: i64) -> Self {
        Self::NotFound { resource_type, id }
    }

    pub fn conflict(resource_type: &'static str, key: impl Into<String>) -> Self {
        Self::Conflict {
            resource_type,
            key: key.into(),
        }
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}
