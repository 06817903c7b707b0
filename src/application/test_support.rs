//! 测试用内存仓储

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

use super::ports::{
    ArticleRecord, ArticleRepositoryPort, AuthorRecord, AuthorRepositoryPort, Page, PageRequest,
    RepositoryError,
};

pub fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn article_record(keywords: &[&str], publish_date: Option<NaiveDateTime>) -> ArticleRecord {
    ArticleRecord {
        id: Uuid::new_v4(),
        header: "header".to_string(),
        description: "description".to_string(),
        text: "text".to_string(),
        publish_date,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        author_ids: Default::default(),
    }
}

#[derive(Default)]
pub struct MemoryArticleRepository {
    rows: Mutex<HashMap<Uuid, ArticleRecord>>,
    saves: AtomicUsize,
}

impl MemoryArticleRepository {
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn select(
        &self,
        page: PageRequest,
        filter: impl Fn(&ArticleRecord) -> bool,
    ) -> Page<ArticleRecord> {
        let rows = self.rows.lock().unwrap();
        let mut matched: Vec<ArticleRecord> = rows.values().filter(|r| filter(r)).cloned().collect();
        matched.sort_by(|a, b| b.publish_date.cmp(&a.publish_date).then(a.id.cmp(&b.id)));

        let total = matched.len() as u64;
        let items = matched
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Page::new(items, page, total)
    }
}

#[async_trait]
impl ArticleRepositoryPort for MemoryArticleRepository {
    async fn save(&self, article: &ArticleRecord) -> Result<(), RepositoryError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().insert(article.id, article.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ArticleRecord>, RepositoryError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }

    async fn find_all(&self, page: PageRequest) -> Result<Page<ArticleRecord>, RepositoryError> {
        Ok(self.select(page, |_| true))
    }

    async fn find_by_author(
        &self,
        author_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<ArticleRecord>, RepositoryError> {
        Ok(self.select(page, |r| r.author_ids.contains(&author_id)))
    }

    async fn find_by_keyword(
        &self,
        keyword: &str,
        page: PageRequest,
    ) -> Result<Page<ArticleRecord>, RepositoryError> {
        Ok(self.select(page, |r| r.keywords.contains(keyword)))
    }

    async fn find_by_publish_date_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        page: PageRequest,
    ) -> Result<Page<ArticleRecord>, RepositoryError> {
        Ok(self.select(page, |r| {
            r.publish_date.map_or(false, |d| d >= start && d <= end)
        }))
    }

    async fn find_by_publish_date_after(
        &self,
        start: NaiveDateTime,
        page: PageRequest,
    ) -> Result<Page<ArticleRecord>, RepositoryError> {
        Ok(self.select(page, |r| r.publish_date.map_or(false, |d| d > start)))
    }

    async fn find_by_publish_date_before(
        &self,
        end: NaiveDateTime,
        page: PageRequest,
    ) -> Result<Page<ArticleRecord>, RepositoryError> {
        Ok(self.select(page, |r| r.publish_date.map_or(false, |d| d < end)))
    }
}

#[derive(Default)]
pub struct MemoryAuthorRepository {
    rows: Mutex<HashMap<Uuid, AuthorRecord>>,
    saves: AtomicUsize,
}

impl MemoryAuthorRepository {
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthorRepositoryPort for MemoryAuthorRepository {
    async fn save(&self, author: &AuthorRecord) -> Result<(), RepositoryError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().insert(author.id, author.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AuthorRecord>, RepositoryError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<AuthorRecord>, RepositoryError> {
        let rows = self.rows.lock().unwrap();
        Ok(ids.iter().filter_map(|id| rows.get(id).cloned()).collect())
    }
}
