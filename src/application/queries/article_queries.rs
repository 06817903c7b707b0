//! Article Queries

use uuid::Uuid;

use crate::application::ports::PageRequest;
use crate::domain::publish_date::PublishWindow;
use crate::domain::validation::{required, ConstraintViolation};

/// 获取文章详情查询
#[derive(Debug, Clone)]
pub struct GetArticle {
    pub article_id: Uuid,
}

/// 分页列出所有文章查询
#[derive(Debug, Clone)]
pub struct ListArticles {
    pub page: PageRequest,
}

/// 文章检索条件（每次请求只使用一个）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleFilter {
    Author(Uuid),
    Keyword(String),
    Published(PublishWindow),
}

impl ArticleFilter {
    /// 关键词必填，且至少 3 个字符
    pub fn keyword(keyword: Option<String>) -> Result<Self, ConstraintViolation> {
        let keyword = required("keyword", keyword)?;
        if keyword.chars().count() < 3 {
            return Err(ConstraintViolation::new("keyword", "size must be at least 3"));
        }
        Ok(Self::Keyword(keyword))
    }
}

/// 文章检索查询
#[derive(Debug, Clone)]
pub struct SearchArticles {
    pub filter: ArticleFilter,
    pub page: PageRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_filter_requires_value() {
        assert_eq!(
            ArticleFilter::keyword(None).unwrap_err().to_string(),
            "keyword: may not be null"
        );
    }

    #[test]
    fn test_keyword_filter_min_length() {
        assert_eq!(
            ArticleFilter::keyword(Some("go".to_string())).unwrap_err().to_string(),
            "keyword: size must be at least 3"
        );
        assert_eq!(
            ArticleFilter::keyword(Some("php".to_string())).unwrap(),
            ArticleFilter::Keyword("php".to_string())
        );
    }
}
