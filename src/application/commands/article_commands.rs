//! Article Commands

use uuid::Uuid;

use crate::domain::article::ArticleDraft;

/// 签发文章 ID 命令（两步创建的第一步）
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateArticleId;

/// 保存文章命令
///
/// `path_id` 为路径原文，`article_id` 是其解析结果；`body_id` 为请求体原文
#[derive(Debug, Clone)]
pub struct SaveArticle {
    pub article_id: Uuid,
    pub path_id: String,
    pub body_id: Option<String>,
    pub draft: ArticleDraft,
}

/// 删除文章命令
#[derive(Debug, Clone)]
pub struct DeleteArticle {
    pub article_id: Uuid,
}
