//! Article Context - Value Objects

use uuid::Uuid;

use crate::domain::identifier::generate_id;
use crate::domain::validation::{sized, ConstraintViolation};

/// 文章唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(Uuid);

impl ArticleId {
    pub fn new() -> Self {
        Self(generate_id())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ArticleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 标题（3-255 字符）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header(String);

impl Header {
    pub fn new(header: impl Into<String>) -> Result<Self, ConstraintViolation> {
        sized("header", header.into(), 3, 255).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 摘要（3-600 字符）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    pub fn new(description: impl Into<String>) -> Result<Self, ConstraintViolation> {
        sized("description", description.into(), 3, 600).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 正文（3-6000 字符）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleText(String);

impl ArticleText {
    pub fn new(text: impl Into<String>) -> Result<Self, ConstraintViolation> {
        sized("text", text.into(), 3, 6000).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
