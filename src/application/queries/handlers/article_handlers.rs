//! Article Query Handlers

use chrono::NaiveDateTime;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use uuid::Uuid;

use super::AuthorView;
use crate::application::error::ApplicationError;
use crate::application::ports::{
    ArticleRecord, ArticleRepositoryPort, AuthorRepositoryPort, Page,
};
use crate::application::queries::{ArticleFilter, GetArticle, ListArticles, SearchArticles};
use crate::domain::publish_date::PublishWindow;

// ============================================================================
// Response DTOs
// ============================================================================

/// 文章详情（已关联作者）
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleView {
    pub id: Uuid,
    pub header: String,
    pub description: String,
    pub text: String,
    pub publish_date: Option<NaiveDateTime>,
    pub keywords: BTreeSet<String>,
    pub authors: Vec<AuthorView>,
}

/// 把文章记录与作者记录拼装成 ArticleView
///
/// 同一页内的作者一次性批量读取
#[derive(Clone)]
pub struct ArticleAssembler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl ArticleAssembler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    pub async fn assemble(&self, record: ArticleRecord) -> Result<ArticleView, ApplicationError> {
        self.assemble_all(vec![record])
            .await?
            .pop()
            .ok_or_else(|| ApplicationError::internal("article assembly produced no result"))
    }

    pub async fn assemble_page(
        &self,
        page: Page<ArticleRecord>,
    ) -> Result<Page<ArticleView>, ApplicationError> {
        let Page {
            items,
            page_number,
            page_size,
            total_count,
        } = page;

        Ok(Page {
            items: self.assemble_all(items).await?,
            page_number,
            page_size,
            total_count,
        })
    }

    async fn assemble_all(
        &self,
        records: Vec<ArticleRecord>,
    ) -> Result<Vec<ArticleView>, ApplicationError> {
        let author_ids: Vec<Uuid> = records
            .iter()
            .flat_map(|record| record.author_ids.iter().copied())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let authors: HashMap<Uuid, AuthorView> = self
            .author_repo
            .find_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|author| (author.id, AuthorView::from(author)))
            .collect();

        Ok(records
            .into_iter()
            .map(|record| ArticleView {
                authors: record
                    .author_ids
                    .iter()
                    .filter_map(|id| authors.get(id).cloned())
                    .collect(),
                id: record.id,
                header: record.header,
                description: record.description,
                text: record.text,
                publish_date: record.publish_date,
                keywords: record.keywords,
            })
            .collect())
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetArticle Handler
pub struct GetArticleHandler {
    article_repo: Arc<dyn ArticleRepositoryPort>,
    assembler: ArticleAssembler,
}

impl GetArticleHandler {
    pub fn new(
        article_repo: Arc<dyn ArticleRepositoryPort>,
        author_repo: Arc<dyn AuthorRepositoryPort>,
    ) -> Self {
        Self {
            article_repo,
            assembler: ArticleAssembler::new(author_repo),
        }
    }

    pub async fn handle(&self, query: GetArticle) -> Result<ArticleView, ApplicationError> {
        let article = self
            .article_repo
            .find_by_id(query.article_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Article", query.article_id))?;

        self.assembler.assemble(article).await
    }
}

/// ListArticles Handler
pub struct ListArticlesHandler {
    article_repo: Arc<dyn ArticleRepositoryPort>,
    assembler: ArticleAssembler,
}

impl ListArticlesHandler {
    pub fn new(
        article_repo: Arc<dyn ArticleRepositoryPort>,
        author_repo: Arc<dyn AuthorRepositoryPort>,
    ) -> Self {
        Self {
            article_repo,
            assembler: ArticleAssembler::new(author_repo),
        }
    }

    pub async fn handle(&self, query: ListArticles) -> Result<Page<ArticleView>, ApplicationError> {
        let page = self.article_repo.find_all(query.page).await?;
        self.assembler.assemble_page(page).await
    }
}

/// SearchArticles Handler
pub struct SearchArticlesHandler {
    article_repo: Arc<dyn ArticleRepositoryPort>,
    assembler: ArticleAssembler,
}

impl SearchArticlesHandler {
    pub fn new(
        article_repo: Arc<dyn ArticleRepositoryPort>,
        author_repo: Arc<dyn AuthorRepositoryPort>,
    ) -> Self {
        Self {
            article_repo,
            assembler: ArticleAssembler::new(author_repo),
        }
    }

    pub async fn handle(&self, query: SearchArticles) -> Result<Page<ArticleView>, ApplicationError> {
        let page = query.page;
        let records = match query.filter {
            ArticleFilter::Author(author_id) => {
                self.article_repo.find_by_author(author_id, page).await?
            }
            ArticleFilter::Keyword(keyword) => {
                self.article_repo.find_by_keyword(&keyword, page).await?
            }
            ArticleFilter::Published(PublishWindow::Between(start, end)) => {
                self.article_repo
                    .find_by_publish_date_between(start, end, page)
                    .await?
            }
            ArticleFilter::Published(PublishWindow::After(start)) => {
                self.article_repo.find_by_publish_date_after(start, page).await?
            }
            ArticleFilter::Published(PublishWindow::Before(end)) => {
                self.article_repo.find_by_publish_date_before(end, page).await?
            }
        };

        tracing::debug!(
            total = records.total_count,
            page = records.page_number,
            "Article search completed"
        );

        self.assembler.assemble_page(records).await
    }
}
