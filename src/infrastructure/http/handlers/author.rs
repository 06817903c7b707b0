//! Author HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::application::{GenerateAuthorId, GetAuthor, SaveAuthor};
use crate::domain::check_uuid;
use crate::infrastructure::http::dto::{AuthorRequest, AuthorResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 签发作者 ID
pub async fn generate_author_id(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let id = state
        .generate_author_id_handler
        .handle(GenerateAuthorId)
        .to_string();

    (
        StatusCode::CREATED,
        [(header::LOCATION, format!("author/{id}"))],
        id,
    )
}

/// 保存作者
pub async fn save_author(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<AuthorRequest>, JsonRejection>,
) -> Result<Json<AuthorResponse>, ApiError> {
    let author_id = check_uuid(&id)?;
    let Json(request) = body?;
    let (body_id, draft) = request.into_parts();

    let view = state
        .save_author_handler
        .handle(SaveAuthor {
            author_id,
            path_id: id,
            body_id,
            draft,
        })
        .await?;

    Ok(Json(AuthorResponse::from(view)))
}

/// 获取作者详情
pub async fn get_author(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<AuthorResponse>, ApiError> {
    let author_id = check_uuid(&id)?;
    let view = state.get_author_handler.handle(GetAuthor { author_id }).await?;

    Ok(Json(AuthorResponse::from(view)))
}
