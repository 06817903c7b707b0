//! SQLite Article Repository
//!
//! 文章行、关键词表与作者关联表在同一事务内写入

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::FromRow;
use std::collections::{BTreeSet, HashMap};
use uuid::Uuid;

use super::{db_error, placeholders, DbPool};
use crate::application::ports::{
    ArticleRecord, ArticleRepositoryPort, Page, PageRequest, RepositoryError,
};
use crate::domain::publish_date::{format_publish_date, parse_publish_date};

/// SQLite Article Repository
pub struct SqliteArticleRepository {
    pool: DbPool,
}

impl SqliteArticleRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ArticleRow {
    id: String,
    header: String,
    description: String,
    text: String,
    publish_date: Option<String>,
}

#[derive(FromRow)]
struct KeywordRow {
    article_id: String,
    keyword: String,
}

#[derive(FromRow)]
struct AuthorLinkRow {
    article_id: String,
    author_id: String,
}

fn parse_uuid(value: &str) -> Result<Uuid, RepositoryError> {
    Uuid::parse_str(value).map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

impl TryFrom<ArticleRow> for ArticleRecord {
    type Error = RepositoryError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(ArticleRecord {
            id: parse_uuid(&row.id)?,
            header: row.header,
            description: row.description,
            text: row.text,
            publish_date: row
                .publish_date
                .as_deref()
                .map(parse_publish_date)
                .transpose()
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            keywords: BTreeSet::new(),
            author_ids: BTreeSet::new(),
        })
    }
}

/// 分页检索范围
enum Scope<'a> {
    All,
    Author(Uuid),
    Keyword(&'a str),
    Between(NaiveDateTime, NaiveDateTime),
    After(NaiveDateTime),
    Before(NaiveDateTime),
}

impl Scope<'_> {
    fn clause(&self) -> &'static str {
        match self {
            Scope::All => "",
            Scope::Author(_) => {
                "WHERE a.id IN (SELECT article_id FROM author_article WHERE author_id = ?)"
            }
            Scope::Keyword(_) => {
                "WHERE a.id IN (SELECT article_id FROM article_keywords WHERE keyword = ?)"
            }
            Scope::Between(_, _) => "WHERE a.publish_date >= ? AND a.publish_date <= ?",
            Scope::After(_) => "WHERE a.publish_date > ?",
            Scope::Before(_) => "WHERE a.publish_date < ?",
        }
    }

    fn params(&self) -> Vec<String> {
        match self {
            Scope::All => Vec::new(),
            Scope::Author(id) => vec![id.to_string()],
            Scope::Keyword(keyword) => vec![keyword.to_string()],
            Scope::Between(start, end) => {
                vec![format_publish_date(start), format_publish_date(end)]
            }
            Scope::After(start) => vec![format_publish_date(start)],
            Scope::Before(end) => vec![format_publish_date(end)],
        }
    }
}

impl SqliteArticleRepository {
    async fn fetch_page(
        &self,
        scope: Scope<'_>,
        page: PageRequest,
    ) -> Result<Page<ArticleRecord>, RepositoryError> {
        let clause = scope.clause();
        let params = scope.params();

        let count_sql = format!("SELECT COUNT(*) FROM articles a {clause}");
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        for param in &params {
            count_query = count_query.bind(param.as_str());
        }
        let total = count_query.fetch_one(&self.pool).await.map_err(db_error)?;

        let select_sql = format!(
            "SELECT a.id, a.header, a.description, a.text, a.publish_date FROM articles a {clause} \
             ORDER BY a.publish_date DESC, a.id LIMIT ? OFFSET ?"
        );
        let mut select_query = sqlx::query_as::<_, ArticleRow>(&select_sql);
        for param in &params {
            select_query = select_query.bind(param.as_str());
        }
        let rows = select_query
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        let items = self.hydrate(rows).await?;
        Ok(Page::new(items, page, total.max(0) as u64))
    }

    /// 为文章行补齐关键词与作者 ID，保持行顺序
    async fn hydrate(&self, rows: Vec<ArticleRow>) -> Result<Vec<ArticleRecord>, RepositoryError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = rows.iter().map(|row| row.id.clone()).collect();
        let marks = placeholders(ids.len());

        let keyword_sql = format!(
            "SELECT article_id, keyword FROM article_keywords WHERE article_id IN ({marks})"
        );
        let mut keyword_query = sqlx::query_as::<_, KeywordRow>(&keyword_sql);
        for id in &ids {
            keyword_query = keyword_query.bind(id.as_str());
        }
        let keyword_rows = keyword_query.fetch_all(&self.pool).await.map_err(db_error)?;

        let link_sql = format!(
            "SELECT article_id, author_id FROM author_article WHERE article_id IN ({marks})"
        );
        let mut link_query = sqlx::query_as::<_, AuthorLinkRow>(&link_sql);
        for id in &ids {
            link_query = link_query.bind(id.as_str());
        }
        let link_rows = link_query.fetch_all(&self.pool).await.map_err(db_error)?;

        let mut keywords: HashMap<String, BTreeSet<String>> = HashMap::new();
        for row in keyword_rows {
            keywords.entry(row.article_id).or_default().insert(row.keyword);
        }

        let mut links: HashMap<String, BTreeSet<Uuid>> = HashMap::new();
        for row in link_rows {
            let author_id = parse_uuid(&row.author_id)?;
            links.entry(row.article_id).or_default().insert(author_id);
        }

        rows.into_iter()
            .map(|row| {
                let article_keywords = keywords.remove(&row.id).unwrap_or_default();
                let author_ids = links.remove(&row.id).unwrap_or_default();
                let mut record = ArticleRecord::try_from(row)?;
                record.keywords = article_keywords;
                record.author_ids = author_ids;
                Ok(record)
            })
            .collect()
    }
}

#[async_trait]
impl ArticleRepositoryPort for SqliteArticleRepository {
    async fn save(&self, article: &ArticleRecord) -> Result<(), RepositoryError> {
        let id = article.id.to_string();
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        sqlx::query(
            r#"
            INSERT INTO articles (id, header, description, text, publish_date)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                header = excluded.header,
                description = excluded.description,
                text = excluded.text,
                publish_date = excluded.publish_date
            "#,
        )
        .bind(&id)
        .bind(&article.header)
        .bind(&article.description)
        .bind(&article.text)
        .bind(article.publish_date.as_ref().map(format_publish_date))
        .execute(&mut *tx)
        .await
        .map_err(db_error)?;

        // 关键词与作者关系整体替换
        sqlx::query("DELETE FROM article_keywords WHERE article_id = ?")
            .bind(&id)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        for keyword in &article.keywords {
            sqlx::query("INSERT INTO article_keywords (article_id, keyword) VALUES (?, ?)")
                .bind(&id)
                .bind(keyword)
                .execute(&mut *tx)
                .await
                .map_err(db_error)?;
        }

        sqlx::query("DELETE FROM author_article WHERE article_id = ?")
            .bind(&id)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        for author_id in &article.author_ids {
            sqlx::query("INSERT INTO author_article (article_id, author_id) VALUES (?, ?)")
                .bind(&id)
                .bind(author_id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(db_error)?;
        }

        tx.commit().await.map_err(db_error)?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ArticleRecord>, RepositoryError> {
        let row: Option<ArticleRow> = sqlx::query_as(
            "SELECT id, header, description, text, publish_date FROM articles WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        match row {
            Some(row) => Ok(self.hydrate(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let id = id.to_string();
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        sqlx::query("DELETE FROM article_keywords WHERE article_id = ?")
            .bind(&id)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        sqlx::query("DELETE FROM author_article WHERE article_id = ?")
            .bind(&id)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(&id)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        tx.commit().await.map_err(db_error)?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_all(&self, page: PageRequest) -> Result<Page<ArticleRecord>, RepositoryError> {
        self.fetch_page(Scope::All, page).await
    }

    async fn find_by_author(
        &self,
        author_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<ArticleRecord>, RepositoryError> {
        self.fetch_page(Scope::Author(author_id), page).await
    }

    async fn find_by_keyword(
        &self,
        keyword: &str,
        page: PageRequest,
    ) -> Result<Page<ArticleRecord>, RepositoryError> {
        self.fetch_page(Scope::Keyword(keyword), page).await
    }

    async fn find_by_publish_date_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        page: PageRequest,
    ) -> Result<Page<ArticleRecord>, RepositoryError> {
        self.fetch_page(Scope::Between(start, end), page).await
    }

    async fn find_by_publish_date_after(
        &self,
        start: NaiveDateTime,
        page: PageRequest,
    ) -> Result<Page<ArticleRecord>, RepositoryError> {
        self.fetch_page(Scope::After(start), page).await
    }

    async fn find_by_publish_date_before(
        &self,
        end: NaiveDateTime,
        page: PageRequest,
    ) -> Result<Page<ArticleRecord>, RepositoryError> {
        self.fetch_page(Scope::Before(end), page).await
    }
}
