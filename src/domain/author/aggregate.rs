//! Author Context - Aggregate Root

use super::{AuthorError, AuthorId, FirstName, LastName};
use crate::domain::validation::required;

/// 作者提交内容（未校验）
#[derive(Debug, Clone, Default)]
pub struct AuthorDraft {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Author 聚合根
///
/// 不持有文章引用，文章关系只存在于 author_article 关联表
#[derive(Debug, Clone)]
pub struct Author {
    id: AuthorId,
    first_name: FirstName,
    last_name: LastName,
}

impl Author {
    pub fn new(id: AuthorId, first_name: FirstName, last_name: LastName) -> Self {
        Self {
            id,
            first_name,
            last_name,
        }
    }

    /// 校验提交内容并构造作者
    pub fn from_draft(id: AuthorId, draft: AuthorDraft) -> Result<Self, AuthorError> {
        let first_name = FirstName::new(required("firstName", draft.first_name)?)?;
        let last_name = LastName::new(required("lastName", draft.last_name)?)?;
        Ok(Self::new(id, first_name, last_name))
    }

    pub fn id(&self) -> &AuthorId {
        &self.id
    }

    pub fn first_name(&self) -> &FirstName {
        &self.first_name
    }

    pub fn last_name(&self) -> &LastName {
        &self.last_name
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Author {}
