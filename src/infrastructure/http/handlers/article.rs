//! Article HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::application::{
    ArticleFilter, ArticleView, DeleteArticle, GenerateArticleId, GetArticle, ListArticles, Page,
    PageRequest, SaveArticle, SearchArticles,
};
use crate::domain::{check_uuid, PublishWindow};
use crate::infrastructure::http::dto::{
    ArticleRequest, ArticleResponse, KeywordParams, PageParams, PublishedParams,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

type ArticlePage = Json<Page<ArticleResponse>>;

fn into_response_page(page: Page<ArticleView>) -> ArticlePage {
    let Page {
        items,
        page_number,
        page_size,
        total_count,
    } = page;

    Json(Page {
        items: items.into_iter().map(ArticleResponse::from).collect(),
        page_number,
        page_size,
        total_count,
    })
}

/// 签发文章 ID
pub async fn generate_article_id(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let id = state
        .generate_article_id_handler
        .handle(GenerateArticleId)
        .to_string();

    (
        StatusCode::CREATED,
        [(header::LOCATION, format!("article/{id}"))],
        id,
    )
}

/// 保存文章
pub async fn save_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<ArticleRequest>, JsonRejection>,
) -> Result<Json<ArticleResponse>, ApiError> {
    let article_id = check_uuid(&id)?;
    let Json(request) = body?;
    let (body_id, draft) = request.into_parts();

    let view = state
        .save_article_handler
        .handle(SaveArticle {
            article_id,
            path_id: id,
            body_id,
            draft,
        })
        .await?;

    Ok(Json(ArticleResponse::from(view)))
}

/// 获取文章详情
pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ArticleResponse>, ApiError> {
    let article_id = check_uuid(&id)?;
    let view = state
        .get_article_handler
        .handle(GetArticle { article_id })
        .await?;

    Ok(Json(ArticleResponse::from(view)))
}

/// 删除文章
pub async fn delete_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let article_id = check_uuid(&id)?;
    state
        .delete_article_handler
        .handle(DeleteArticle { article_id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// 分页列出所有文章
pub async fn list_articles(
    State(state): State<Arc<AppState>>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<ArticlePage, ApiError> {
    let Query(params) = params?;
    let page = params.request(&state.page_limits)?;

    let result = state
        .list_articles_handler
        .handle(ListArticles { page })
        .await?;

    Ok(into_response_page(result))
}

/// 按作者检索
pub async fn articles_by_author(
    State(state): State<Arc<AppState>>,
    Path(author_id): Path<String>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<ArticlePage, ApiError> {
    let author_id = check_uuid(&author_id)?;
    let Query(params) = params?;
    let page = params.request(&state.page_limits)?;

    search(&state, ArticleFilter::Author(author_id), page).await
}

/// 按关键词检索
pub async fn articles_by_keyword(
    State(state): State<Arc<AppState>>,
    params: Result<Query<KeywordParams>, QueryRejection>,
) -> Result<ArticlePage, ApiError> {
    let Query(params) = params?;
    let filter = ArticleFilter::keyword(params.keyword)?;
    let page = state.page_limits.request(params.page, params.size)?;

    search(&state, filter, page).await
}

/// 按发布时间检索
pub async fn articles_by_publish_date(
    State(state): State<Arc<AppState>>,
    params: Result<Query<PublishedParams>, QueryRejection>,
) -> Result<ArticlePage, ApiError> {
    let Query(params) = params?;
    let window =
        PublishWindow::from_bounds(params.start_date.as_deref(), params.end_date.as_deref())?;
    let page = state.page_limits.request(params.page, params.size)?;

    search(&state, ArticleFilter::Published(window), page).await
}

async fn search(
    state: &AppState,
    filter: ArticleFilter,
    page: PageRequest,
) -> Result<ArticlePage, ApiError> {
    let result = state
        .search_articles_handler
        .handle(SearchArticles { filter, page })
        .await?;

    Ok(into_response_page(result))
}
