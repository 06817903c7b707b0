//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    DeleteArticleHandler, GenerateArticleIdHandler, GenerateAuthorIdHandler, SaveArticleHandler,
    SaveAuthorHandler,
    // Query handlers
    GetArticleHandler, GetAuthorHandler, ListArticlesHandler, SearchArticlesHandler,
    // Ports
    ArticleRepositoryPort, AuthorRepositoryPort, PageLimits,
};

/// 应用状态
pub struct AppState {
    // ========== Settings ==========
    pub page_limits: PageLimits,

    // ========== Command Handlers ==========
    pub generate_article_id_handler: GenerateArticleIdHandler,
    pub save_article_handler: SaveArticleHandler,
    pub delete_article_handler: DeleteArticleHandler,
    pub generate_author_id_handler: GenerateAuthorIdHandler,
    pub save_author_handler: SaveAuthorHandler,

    // ========== Query Handlers ==========
    pub get_article_handler: GetArticleHandler,
    pub list_articles_handler: ListArticlesHandler,
    pub search_articles_handler: SearchArticlesHandler,
    pub get_author_handler: GetAuthorHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        article_repo: Arc<dyn ArticleRepositoryPort>,
        author_repo: Arc<dyn AuthorRepositoryPort>,
        page_limits: PageLimits,
    ) -> Self {
        Self {
            page_limits,

            // Command handlers
            generate_article_id_handler: GenerateArticleIdHandler::new(),
            save_article_handler: SaveArticleHandler::new(
                article_repo.clone(),
                author_repo.clone(),
            ),
            delete_article_handler: DeleteArticleHandler::new(article_repo.clone()),
            generate_author_id_handler: GenerateAuthorIdHandler::new(),
            save_author_handler: SaveAuthorHandler::new(author_repo.clone()),

            // Query handlers
            get_article_handler: GetArticleHandler::new(article_repo.clone(), author_repo.clone()),
            list_articles_handler: ListArticlesHandler::new(
                article_repo.clone(),
                author_repo.clone(),
            ),
            search_articles_handler: SearchArticlesHandler::new(
                article_repo,
                author_repo.clone(),
            ),
            get_author_handler: GetAuthorHandler::new(author_repo),
        }
    }
}
