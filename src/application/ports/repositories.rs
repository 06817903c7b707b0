//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::collections::BTreeSet;
use thiserror::Error;
use uuid::Uuid;

use super::{Page, PageRequest};
use crate::domain::article::Article;
use crate::domain::author::Author;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Article Repository
// ============================================================================

/// 文章实体（用于持久化）
///
/// 作者关系只保存 ID，对应 author_article 关联表
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleRecord {
    pub id: Uuid,
    pub header: String,
    pub description: String,
    pub text: String,
    pub publish_date: Option<NaiveDateTime>,
    pub keywords: BTreeSet<String>,
    pub author_ids: BTreeSet<Uuid>,
}

impl From<&Article> for ArticleRecord {
    fn from(article: &Article) -> Self {
        Self {
            id: *article.id().as_uuid(),
            header: article.header().as_str().to_string(),
            description: article.description().as_str().to_string(),
            text: article.text().as_str().to_string(),
            publish_date: article.publish_date(),
            keywords: article.keywords().clone(),
            author_ids: article.authors().iter().map(|id| *id.as_uuid()).collect(),
        }
    }
}

/// Article Repository Port
///
/// 所有分页查询按发布时间倒序、ID 正序返回
#[async_trait]
pub trait ArticleRepositoryPort: Send + Sync {
    /// 保存文章（覆盖关键词与作者关系）
    async fn save(&self, article: &ArticleRecord) -> Result<(), RepositoryError>;

    /// 根据 ID 查找文章
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ArticleRecord>, RepositoryError>;

    /// 删除文章，返回是否存在
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;

    /// 分页获取所有文章
    async fn find_all(&self, page: PageRequest) -> Result<Page<ArticleRecord>, RepositoryError>;

    /// 按作者查找
    async fn find_by_author(
        &self,
        author_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<ArticleRecord>, RepositoryError>;

    /// 按关键词查找
    async fn find_by_keyword(
        &self,
        keyword: &str,
        page: PageRequest,
    ) -> Result<Page<ArticleRecord>, RepositoryError>;

    /// 发布时间在 [start, end] 内
    async fn find_by_publish_date_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        page: PageRequest,
    ) -> Result<Page<ArticleRecord>, RepositoryError>;

    /// 发布时间晚于 start
    async fn find_by_publish_date_after(
        &self,
        start: NaiveDateTime,
        page: PageRequest,
    ) -> Result<Page<ArticleRecord>, RepositoryError>;

    /// 发布时间早于 end
    async fn find_by_publish_date_before(
        &self,
        end: NaiveDateTime,
        page: PageRequest,
    ) -> Result<Page<ArticleRecord>, RepositoryError>;
}

// ============================================================================
// Author Repository
// ============================================================================

/// 作者实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRecord {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

impl From<&Author> for AuthorRecord {
    fn from(author: &Author) -> Self {
        Self {
            id: *author.id().as_uuid(),
            first_name: author.first_name().as_str().to_string(),
            last_name: author.last_name().as_str().to_string(),
        }
    }
}

/// Author Repository Port
#[async_trait]
pub trait AuthorRepositoryPort: Send + Sync {
    /// 保存作者
    async fn save(&self, author: &AuthorRecord) -> Result<(), RepositoryError>;

    /// 根据 ID 查找作者
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AuthorRecord>, RepositoryError>;

    /// 批量查找作者（不存在的 ID 被忽略）
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<AuthorRecord>, RepositoryError>;
}
