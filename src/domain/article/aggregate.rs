//! Article Context - Aggregate Root

use chrono::NaiveDateTime;
use std::collections::BTreeSet;

use super::{ArticleError, ArticleId, ArticleText, Description, Header};
use crate::domain::author::AuthorId;
use crate::domain::identifier::check_uuid;
use crate::domain::publish_date::truncate_to_seconds;
use crate::domain::validation::{required, ConstraintViolation};

/// 文章提交内容（未校验）
///
/// `authors` 中只保留作者 ID，作者的其余字段以库中记录为准
#[derive(Debug, Clone, Default)]
pub struct ArticleDraft {
    pub header: Option<String>,
    pub description: Option<String>,
    pub text: Option<String>,
    pub keywords: Option<BTreeSet<String>>,
    pub authors: Option<Vec<Option<String>>>,
}

/// Article 聚合根
///
/// 不变量:
/// - 标题、摘要、正文、关键词集合在保存时必须存在
/// - 与作者的多对多关系仅以 AuthorId 表示
/// - 发布时间由服务端在保存时写入
#[derive(Debug, Clone)]
pub struct Article {
    id: ArticleId,
    header: Header,
    description: Description,
    text: ArticleText,
    publish_date: Option<NaiveDateTime>,
    keywords: BTreeSet<String>,
    authors: BTreeSet<AuthorId>,
}

impl Article {
    pub fn new(
        id: ArticleId,
        header: Header,
        description: Description,
        text: ArticleText,
        keywords: BTreeSet<String>,
        authors: BTreeSet<AuthorId>,
    ) -> Self {
        Self {
            id,
            header,
            description,
            text,
            publish_date: None,
            keywords,
            authors,
        }
    }

    /// 校验提交内容并构造文章
    pub fn from_draft(id: ArticleId, draft: ArticleDraft) -> Result<Self, ArticleError> {
        let header = Header::new(required("header", draft.header)?)?;
        let description = Description::new(required("description", draft.description)?)?;
        let text = ArticleText::new(required("text", draft.text)?)?;
        let keywords = required("keywords", draft.keywords)?;

        let mut authors = BTreeSet::new();
        for reference in draft.authors.unwrap_or_default() {
            let raw = reference.ok_or_else(|| ConstraintViolation::missing("authors.id"))?;
            let uuid = check_uuid(&raw).map_err(|_| ArticleError::InvalidAuthorReference(raw))?;
            authors.insert(AuthorId::from_uuid(uuid));
        }

        Ok(Self::new(id, header, description, text, keywords, authors))
    }

    /// 标记发布（精确到秒）
    pub fn publish(&mut self, at: NaiveDateTime) {
        self.publish_date = Some(truncate_to_seconds(at));
    }

    // Getters
    pub fn id(&self) -> &ArticleId {
        &self.id
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn text(&self) -> &ArticleText {
        &self.text
    }

    pub fn publish_date(&self) -> Option<NaiveDateTime> {
        self.publish_date
    }

    pub fn keywords(&self) -> &BTreeSet<String> {
        &self.keywords
    }

    pub fn authors(&self) -> &BTreeSet<AuthorId> {
        &self.authors
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Article {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn valid_draft() -> ArticleDraft {
        ArticleDraft {
            header: Some("header".to_string()),
            description: Some("short".to_string()),
            text: Some("text".to_string()),
            keywords: Some(["java", "php"].iter().map(|k| k.to_string()).collect()),
            authors: Some(vec![Some("16fd2706-8baf-433b-82eb-8c7fada847da".to_string())]),
        }
    }

    #[test]
    fn test_article_from_valid_draft() {
        let article = Article::from_draft(ArticleId::new(), valid_draft()).unwrap();
        assert_eq!(article.header().as_str(), "header");
        assert_eq!(article.keywords().len(), 2);
        assert_eq!(article.authors().len(), 1);
        assert!(article.publish_date().is_none());
    }

    #[test]
    fn test_article_requires_header() {
        let draft = ArticleDraft {
            header: None,
            ..valid_draft()
        };
        let err = Article::from_draft(ArticleId::new(), draft).unwrap_err();
        assert_eq!(err.to_string(), "header: may not be null");
    }

    #[test]
    fn test_article_requires_keywords_but_not_authors() {
        let draft = ArticleDraft {
            keywords: None,
            ..valid_draft()
        };
        let err = Article::from_draft(ArticleId::new(), draft).unwrap_err();
        assert_eq!(err.to_string(), "keywords: may not be null");

        let draft = ArticleDraft {
            authors: None,
            ..valid_draft()
        };
        let article = Article::from_draft(ArticleId::new(), draft).unwrap();
        assert!(article.authors().is_empty());
    }

    #[test]
    fn test_article_text_length_limits() {
        let draft = ArticleDraft {
            text: Some("x".repeat(6001)),
            ..valid_draft()
        };
        let err = Article::from_draft(ArticleId::new(), draft).unwrap_err();
        assert_eq!(err.to_string(), "text: size must be between 3 and 6000");

        let draft = ArticleDraft {
            description: Some("ab".to_string()),
            ..valid_draft()
        };
        assert!(Article::from_draft(ArticleId::new(), draft).is_err());
    }

    #[test]
    fn test_article_rejects_malformed_author_reference() {
        let draft = ArticleDraft {
            authors: Some(vec![Some("not-a-uuid".to_string())]),
            ..valid_draft()
        };
        assert_eq!(
            Article::from_draft(ArticleId::new(), draft).unwrap_err(),
            ArticleError::InvalidAuthorReference("not-a-uuid".to_string())
        );

        let draft = ArticleDraft {
            authors: Some(vec![None]),
            ..valid_draft()
        };
        assert!(Article::from_draft(ArticleId::new(), draft).is_err());
    }

    #[test]
    fn test_duplicate_author_references_collapse() {
        let id = "16fd2706-8baf-433b-82eb-8c7fada847da".to_string();
        let draft = ArticleDraft {
            authors: Some(vec![Some(id.clone()), Some(id.to_uppercase())]),
            ..valid_draft()
        };
        let article = Article::from_draft(ArticleId::new(), draft).unwrap();
        assert_eq!(article.authors().len(), 1);
    }

    #[test]
    fn test_publish_truncates_to_seconds() {
        let mut article = Article::from_draft(ArticleId::new(), valid_draft()).unwrap();
        let at = NaiveDate::from_ymd_opt(2015, 11, 13)
            .unwrap()
            .and_hms_milli_opt(10, 20, 30, 450)
            .unwrap();
        article.publish(at);
        assert_eq!(
            article.publish_date(),
            NaiveDate::from_ymd_opt(2015, 11, 13).unwrap().and_hms_opt(10, 20, 30)
        );
    }
}
