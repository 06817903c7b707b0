//! Article Command Handlers

use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{DeleteArticle, GenerateArticleId, SaveArticle};
use crate::application::error::ApplicationError;
use crate::application::ports::{ArticleRecord, ArticleRepositoryPort, AuthorRepositoryPort};
use crate::application::queries::handlers::{ArticleView, AuthorView};
use crate::domain::article::{Article, ArticleId};
use crate::domain::identifier::{generate_id, same_identifier};
use crate::domain::validation::required;

/// GenerateArticleId Handler
#[derive(Debug, Default)]
pub struct GenerateArticleIdHandler;

impl GenerateArticleIdHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, _cmd: GenerateArticleId) -> Uuid {
        let id = generate_id();
        tracing::debug!(article_id = %id, "Article id issued");
        id
    }
}

/// SaveArticle Handler
///
/// 执行顺序：请求体 ID 必填 → ID 一致性 → 字段校验 → 作者存在性 → 写入发布时间 → 持久化
pub struct SaveArticleHandler {
    article_repo: Arc<dyn ArticleRepositoryPort>,
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl SaveArticleHandler {
    pub fn new(
        article_repo: Arc<dyn ArticleRepositoryPort>,
        author_repo: Arc<dyn AuthorRepositoryPort>,
    ) -> Self {
        Self {
            article_repo,
            author_repo,
        }
    }

    pub async fn handle(&self, cmd: SaveArticle) -> Result<ArticleView, ApplicationError> {
        let body_id = required("id", cmd.body_id)?;
        if !same_identifier(&cmd.path_id, &body_id) {
            return Err(ApplicationError::identifier_mismatch("Article", cmd.article_id));
        }

        let mut article = Article::from_draft(ArticleId::from_uuid(cmd.article_id), cmd.draft)?;

        let author_ids: Vec<Uuid> = article.authors().iter().map(|id| *id.as_uuid()).collect();
        let found: HashMap<Uuid, AuthorView> = self
            .author_repo
            .find_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|author| (author.id, AuthorView::from(author)))
            .collect();

        let mut authors = Vec::with_capacity(author_ids.len());
        for id in &author_ids {
            let author = found
                .get(id)
                .cloned()
                .ok_or_else(|| ApplicationError::not_found("Author", *id))?;
            authors.push(author);
        }

        article.publish(Utc::now().naive_utc());

        let record = ArticleRecord::from(&article);
        self.article_repo.save(&record).await?;

        tracing::info!(
            article_id = %record.id,
            keywords = record.keywords.len(),
            authors = authors.len(),
            "Article saved"
        );

        Ok(ArticleView {
            id: record.id,
            header: record.header,
            description: record.description,
            text: record.text,
            publish_date: record.publish_date,
            keywords: record.keywords,
            authors,
        })
    }
}

/// DeleteArticle Handler
pub struct DeleteArticleHandler {
    article_repo: Arc<dyn ArticleRepositoryPort>,
}

impl DeleteArticleHandler {
    pub fn new(article_repo: Arc<dyn ArticleRepositoryPort>) -> Self {
        Self { article_repo }
    }

    pub async fn handle(&self, cmd: DeleteArticle) -> Result<(), ApplicationError> {
        if !self.article_repo.delete(cmd.article_id).await? {
            return Err(ApplicationError::not_found("Article", cmd.article_id));
        }

        tracing::info!(article_id = %cmd.article_id, "Article deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::AuthorRecord;
    use crate::application::test_support::{MemoryArticleRepository, MemoryAuthorRepository};
    use crate::domain::article::ArticleDraft;
    use crate::domain::identifier::is_canonical_uuid;

    struct Fixture {
        articles: Arc<MemoryArticleRepository>,
        authors: Arc<MemoryAuthorRepository>,
        handler: SaveArticleHandler,
    }

    fn fixture() -> Fixture {
        let articles = Arc::new(MemoryArticleRepository::default());
        let authors = Arc::new(MemoryAuthorRepository::default());
        let handler = SaveArticleHandler::new(articles.clone(), authors.clone());
        Fixture {
            articles,
            authors,
            handler,
        }
    }

    fn draft(authors: Vec<Uuid>) -> ArticleDraft {
        ArticleDraft {
            header: Some("header".to_string()),
            description: Some("short".to_string()),
            text: Some("text".to_string()),
            keywords: Some(["java", "php"].iter().map(|k| k.to_string()).collect()),
            authors: Some(authors.iter().map(|id| Some(id.to_string())).collect()),
        }
    }

    async fn seed_author(repo: &MemoryAuthorRepository) -> Uuid {
        let id = Uuid::new_v4();
        repo.save(&AuthorRecord {
            id,
            first_name: "Max".to_string(),
            last_name: "Krieger".to_string(),
        })
        .await
        .unwrap();
        id
    }

    #[test]
    fn test_generated_article_id_is_canonical() {
        let id = GenerateArticleIdHandler::new().handle(GenerateArticleId);
        assert!(is_canonical_uuid(&id.to_string()));
    }

    #[tokio::test]
    async fn test_save_article_publishes_and_persists() {
        let fx = fixture();
        let author_id = seed_author(&fx.authors).await;
        let id = Uuid::new_v4();

        let view = fx
            .handler
            .handle(SaveArticle {
                article_id: id,
                path_id: id.to_string(),
                body_id: Some(id.to_string()),
                draft: draft(vec![author_id]),
            })
            .await
            .unwrap();

        assert!(view.publish_date.is_some());
        assert_eq!(view.authors.len(), 1);
        assert_eq!(view.authors[0].id, author_id);

        let stored = fx.articles.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.keywords, view.keywords);
        assert!(stored.author_ids.contains(&author_id));
    }

    #[tokio::test]
    async fn test_mismatched_identifier_never_touches_storage() {
        let fx = fixture();
        let id = Uuid::new_v4();
        let err = fx
            .handler
            .handle(SaveArticle {
                article_id: id,
                path_id: id.to_string(),
                body_id: Some(Uuid::new_v4().to_string()),
                draft: ArticleDraft::default(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::IdentifierMismatch { .. }));
        assert_eq!(fx.articles.save_count(), 0);
    }

    #[tokio::test]
    async fn test_identifier_case_must_match_path() {
        let fx = fixture();
        let author_id = seed_author(&fx.authors).await;
        let id: Uuid = "8c03f056-4c82-4242-9467-8f1d5a11afda".parse().unwrap();
        let err = fx
            .handler
            .handle(SaveArticle {
                article_id: id,
                path_id: "8C03F056-4C82-4242-9467-8F1D5A11AFDA".to_string(),
                body_id: Some("8c03f056-4c82-4242-9467-8f1d5a11afda".to_string()),
                draft: draft(vec![author_id]),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::IdentifierMismatch { resource_type: "Article", .. }));
        assert_eq!(fx.articles.save_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_body_identifier_is_a_validation_error() {
        let fx = fixture();
        let id = Uuid::new_v4();
        let err = fx
            .handler
            .handle(SaveArticle {
                article_id: id,
                path_id: id.to_string(),
                body_id: None,
                draft: draft(vec![]),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::ValidationError(ref m) if m == "id: may not be null"));
        assert_eq!(fx.articles.save_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_header_is_rejected_before_save() {
        let fx = fixture();
        let id = Uuid::new_v4();
        let err = fx
            .handler
            .handle(SaveArticle {
                article_id: id,
                path_id: id.to_string(),
                body_id: Some(id.to_string()),
                draft: ArticleDraft {
                    header: None,
                    ..draft(vec![])
                },
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::ValidationError(ref m) if m == "header: may not be null"));
        assert_eq!(fx.articles.save_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_author_is_not_found() {
        let fx = fixture();
        let id = Uuid::new_v4();
        let err = fx
            .handler
            .handle(SaveArticle {
                article_id: id,
                path_id: id.to_string(),
                body_id: Some(id.to_string()),
                draft: draft(vec![Uuid::new_v4()]),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::NotFound { resource_type: "Author", .. }));
        assert_eq!(fx.articles.save_count(), 0);
    }

    #[tokio::test]
    async fn test_delete_article() {
        let fx = fixture();
        let id = Uuid::new_v4();
        fx.handler
            .handle(SaveArticle {
                article_id: id,
                path_id: id.to_string(),
                body_id: Some(id.to_string()),
                draft: draft(vec![]),
            })
            .await
            .unwrap();

        let delete = DeleteArticleHandler::new(fx.articles.clone());
        delete.handle(DeleteArticle { article_id: id }).await.unwrap();
        assert!(fx.articles.find_by_id(id).await.unwrap().is_none());

        let err = delete.handle(DeleteArticle { article_id: id }).await.unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }
}
