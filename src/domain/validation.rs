//! 字段约束校验
//!
//! 写操作在落库前必须通过这些检查

use thiserror::Error;

/// 字段约束违反
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ConstraintViolation {
    pub field: &'static str,
    pub message: String,
}

impl ConstraintViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// 必填字段缺失
    pub fn missing(field: &'static str) -> Self {
        Self::new(field, "may not be null")
    }

    /// 长度越界
    pub fn size(field: &'static str, min: usize, max: usize) -> Self {
        Self::new(field, format!("size must be between {} and {}", min, max))
    }
}

/// 取出必填字段
pub fn required<T>(field: &'static str, value: Option<T>) -> Result<T, ConstraintViolation> {
    value.ok_or_else(|| ConstraintViolation::missing(field))
}

/// 按字符数检查长度（闭区间）
pub fn sized(
    field: &'static str,
    value: String,
    min: usize,
    max: usize,
) -> Result<String, ConstraintViolation> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ConstraintViolation::size(field, min, max));
    }
    Ok(value)
}
