//! Data Transfer Objects
//!
//! JSON 字段统一使用 camelCase

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::application::{ArticleView, AuthorView, PageLimits, PageRequest};
use crate::domain::article::ArticleDraft;
use crate::domain::author::AuthorDraft;
use crate::domain::publish_date::serialize_optional;
use crate::domain::ConstraintViolation;

// ============================================================================
// Author DTOs
// ============================================================================

/// 作者请求体，字段缺失由领域校验报告
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRequest {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl AuthorRequest {
    pub fn into_parts(self) -> (Option<String>, AuthorDraft) {
        (
            self.id,
            AuthorDraft {
                first_name: self.first_name,
                last_name: self.last_name,
            },
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

impl From<AuthorView> for AuthorResponse {
    fn from(view: AuthorView) -> Self {
        Self {
            id: view.id,
            first_name: view.first_name,
            last_name: view.last_name,
        }
    }
}

// ============================================================================
// Article DTOs
// ============================================================================

/// 文章中的作者引用，只读取 id
#[derive(Debug, Default, Deserialize)]
pub struct AuthorReference {
    pub id: Option<String>,
}

/// 文章请求体
///
/// `publishDate` 即便提供也会被服务端时间覆盖
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRequest {
    pub id: Option<String>,
    pub header: Option<String>,
    pub description: Option<String>,
    pub text: Option<String>,
    pub keywords: Option<BTreeSet<String>>,
    pub authors: Option<Vec<AuthorReference>>,
}

impl ArticleRequest {
    pub fn into_parts(self) -> (Option<String>, ArticleDraft) {
        (
            self.id,
            ArticleDraft {
                header: self.header,
                description: self.description,
                text: self.text,
                keywords: self.keywords,
                authors: self
                    .authors
                    .map(|authors| authors.into_iter().map(|author| author.id).collect()),
            },
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    pub id: Uuid,
    pub header: String,
    pub description: String,
    pub text: String,
    #[serde(
        serialize_with = "serialize_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub publish_date: Option<NaiveDateTime>,
    pub keywords: BTreeSet<String>,
    pub authors: Vec<AuthorResponse>,
}

impl From<ArticleView> for ArticleResponse {
    fn from(view: ArticleView) -> Self {
        Self {
            id: view.id,
            header: view.header,
            description: view.description,
            text: view.text,
            publish_date: view.publish_date,
            keywords: view.keywords,
            authors: view.authors.into_iter().map(AuthorResponse::from).collect(),
        }
    }
}

// ============================================================================
// Query parameters
// ============================================================================

/// 分页参数
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl PageParams {
    pub fn request(&self, limits: &PageLimits) -> Result<PageRequest, ConstraintViolation> {
        limits.request(self.page, self.size)
    }
}

/// 关键词检索参数
#[derive(Debug, Default, Deserialize)]
pub struct KeywordParams {
    pub keyword: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

/// 发布时间检索参数
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}
