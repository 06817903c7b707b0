//! Author Commands

use uuid::Uuid;

use crate::domain::author::AuthorDraft;

/// 签发作者 ID 命令
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateAuthorId;

/// 保存作者命令
#[derive(Debug, Clone)]
pub struct SaveAuthor {
    pub author_id: Uuid,
    pub path_id: String,
    pub body_id: Option<String>,
    pub draft: AuthorDraft,
}
