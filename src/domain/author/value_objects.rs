//! Author Context - Value Objects

use uuid::Uuid;

use crate::domain::identifier::generate_id;
use crate::domain::validation::{sized, ConstraintViolation};

/// 作者唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AuthorId(Uuid);

impl AuthorId {
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

impl Default for AuthorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 名（3-100 字符）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstName(String);

impl FirstName {
    pub fn new(name: impl Into<String>) -> Result<Self, ConstraintViolation> {
        sized("firstName", name.into(), 3, 100).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 姓（3-100 字符）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastName(String);

impl LastName {
    pub fn new(name: impl Into<String>) -> Result<Self, ConstraintViolation> {
        sized("lastName", name.into(), 3, 100).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
