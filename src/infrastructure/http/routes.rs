//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                          GET     健康检查
//! - /api/article                       POST    签发文章 ID
//! - /api/article                       GET     分页列出文章
//! - /api/article/:id                   PUT     保存文章
//! - /api/article/:id                   GET     获取文章
//! - /api/article/:id                   DELETE  删除文章
//! - /api/article/author/:author_id     GET     按作者检索
//! - /api/article/keyword               GET     按关键词检索
//! - /api/article/published             GET     按发布时间检索
//! - /api/author                        POST    签发作者 ID
//! - /api/author/:id                    PUT     保存作者
//! - /api/author/:id                    GET     获取作者

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(article_routes())
        .merge(author_routes())
}

/// Article 路由
fn article_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/article",
            get(handlers::list_articles).post(handlers::generate_article_id),
        )
        .route(
            "/article/:id",
            get(handlers::get_article)
                .put(handlers::save_article)
                .delete(handlers::delete_article),
        )
        .route(
            "/article/author/:author_id",
            get(handlers::articles_by_author),
        )
        .route("/article/keyword", get(handlers::articles_by_keyword))
        .route("/article/published", get(handlers::articles_by_publish_date))
}

/// Author 路由
fn author_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/author", post(handlers::generate_author_id))
        .route(
            "/author/:id",
            get(handlers::get_author).put(handlers::save_author),
        )
}
