//! HTTP Error Handling
//!
//! 所有错误统一渲染为 `{message, status, exception}`

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{ConstraintViolation, IdentifierError, PublishDateError};

/// 统一错误响应格式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpError {
    pub message: String,
    pub status: u16,
    pub exception: String,
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 请求体或查询参数不满足约束
    Validation(String),
    /// 路径中的 ID 不是合法 UUID
    MalformedIdentifier(String),
    /// 日期不符合固定格式
    MalformedDate(String),
    /// 日期检索缺少上下界
    MissingFilter(String),
    /// 请求体 ID 与路径 ID 不一致
    IdentifierMismatch(String),
    NotFound(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_)
            | ApiError::MalformedIdentifier(_)
            | ApiError::MalformedDate(_)
            | ApiError::MissingFilter(_) => StatusCode::BAD_REQUEST,
            ApiError::IdentifierMismatch(_) | ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn exception(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "ValidationError",
            ApiError::MalformedIdentifier(_) => "MalformedIdentifier",
            ApiError::MalformedDate(_) => "MalformedDate",
            ApiError::MissingFilter(_) => "MissingFilter",
            ApiError::IdentifierMismatch(_) => "IdentifierMismatch",
            ApiError::NotFound(_) => "EntityNotFound",
            ApiError::Internal(_) => "InternalError",
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::Validation(msg)
            | ApiError::MalformedIdentifier(msg)
            | ApiError::MalformedDate(msg)
            | ApiError::MissingFilter(msg)
            | ApiError::IdentifierMismatch(msg)
            | ApiError::NotFound(msg)
            | ApiError::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let exception = self.exception();

        let message = match &self {
            ApiError::Internal(msg) => {
                tracing::error!(exception, error = %msg, "Internal server error");
                "Internal server error".to_string()
            }
            _ => {
                tracing::warn!(
                    status = status.as_u16(),
                    exception,
                    error = %self.message(),
                    "Request rejected"
                );
                self.message().to_string()
            }
        };

        let body = HttpError {
            message,
            status: status.as_u16(),
            exception: exception.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            ApplicationError::IdentifierMismatch { .. } => ApiError::IdentifierMismatch(e.to_string()),
            ApplicationError::ValidationError(msg) => ApiError::Validation(msg),
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
            ApplicationError::InternalError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<IdentifierError> for ApiError {
    fn from(e: IdentifierError) -> Self {
        ApiError::MalformedIdentifier(e.to_string())
    }
}

impl From<PublishDateError> for ApiError {
    fn from(e: PublishDateError) -> Self {
        match e {
            PublishDateError::PatternMismatch(_) => ApiError::MalformedDate(e.to_string()),
            PublishDateError::MissingBound => ApiError::MissingFilter(e.to_string()),
        }
    }
}

impl From<ConstraintViolation> for ApiError {
    fn from(e: ConstraintViolation) -> Self {
        ApiError::Validation(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::Validation(e.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(e: QueryRejection) -> Self {
        ApiError::Validation(e.body_text())
    }
}
