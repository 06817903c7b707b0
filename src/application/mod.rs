//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（ArticleRepository、AuthorRepository、分页）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports
pub use commands::{
    // Article commands
    DeleteArticle,
    GenerateArticleId,
    SaveArticle,
    // Author commands
    GenerateAuthorId,
    SaveAuthor,
    // Handlers
    handlers::{
        DeleteArticleHandler, GenerateArticleIdHandler, GenerateAuthorIdHandler,
        SaveArticleHandler, SaveAuthorHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    ArticleRecord, ArticleRepositoryPort, AuthorRecord, AuthorRepositoryPort, Page, PageLimits,
    PageRequest, RepositoryError,
};

pub use queries::{
    // Article queries
    ArticleFilter,
    GetArticle,
    ListArticles,
    SearchArticles,
    // Author queries
    GetAuthor,
    // Handlers
    handlers::{
        ArticleAssembler, ArticleView, AuthorView, GetArticleHandler, GetAuthorHandler,
        ListArticlesHandler, SearchArticlesHandler,
    },
};
