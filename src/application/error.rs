//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;
use uuid::Uuid;

use crate::domain::article::ArticleError;
use crate::domain::author::AuthorError;
use crate::domain::validation::ConstraintViolation;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: Uuid,
    },

    /// 请求体 ID 与路径 ID 不一致
    #[error("{resource_type} not found: body identifier does not match {path_id}")]
    IdentifierMismatch {
        resource_type: &'static str,
        path_id: Uuid,
    },

    /// 验证错误
    #[error("{0}")]
    ValidationError(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: Uuid) -> Self {
        Self::NotFound { resource_type, id }
    }

    /// 创建 ID 不一致错误
    pub fn identifier_mismatch(resource_type: &'static str, path_id: Uuid) -> Self {
        Self::IdentifierMismatch {
            resource_type,
            path_id,
        }
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<crate::application::ports::RepositoryError> for ApplicationError {
    fn from(err: crate::application::ports::RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

impl From<ConstraintViolation> for ApplicationError {
    fn from(err: ConstraintViolation) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<ArticleError> for ApplicationError {
    fn from(err: ArticleError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<AuthorError> for ApplicationError {
    fn from(err: AuthorError) -> Self {
        Self::validation(err.to_string())
    }
}
