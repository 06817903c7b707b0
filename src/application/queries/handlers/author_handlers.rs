//! Author Query Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::application::ports::{AuthorRecord, AuthorRepositoryPort};
use crate::application::queries::GetAuthor;

// ============================================================================
// Response DTOs
// ============================================================================

/// 作者详情
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorView {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

impl From<AuthorRecord> for AuthorView {
    fn from(record: AuthorRecord) -> Self {
        Self {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetAuthor Handler
pub struct GetAuthorHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl GetAuthorHandler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    pub async fn handle(&self, query: GetAuthor) -> Result<AuthorView, ApplicationError> {
        let author = self
            .author_repo
            .find_by_id(query.author_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Author", query.author_id))?;

        Ok(AuthorView::from(author))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::MemoryAuthorRepository;

    #[tokio::test]
    async fn test_get_author() {
        let repo = Arc::new(MemoryAuthorRepository::default());
        let id = Uuid::new_v4();
        repo.save(&AuthorRecord {
            id,
            first_name: "Max".to_string(),
            last_name: "Krieger".to_string(),
        })
        .await
        .unwrap();

        let handler = GetAuthorHandler::new(repo);
        let author = handler.handle(GetAuthor { author_id: id }).await.unwrap();
        assert_eq!(author.first_name, "Max");
    }

    #[tokio::test]
    async fn test_get_missing_author() {
        let handler = GetAuthorHandler::new(Arc::new(MemoryAuthorRepository::default()));
        let err = handler
            .handle(GetAuthor {
                author_id: Uuid::new_v4(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { resource_type: "Author", .. }));
    }
}
