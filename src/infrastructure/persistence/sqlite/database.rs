//! SQLite Database - 数据库连接和迁移

use std::str::FromStr;
use std::time::Duration;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous},
    Pool, Sqlite,
};

use crate::application::ports::RepositoryError;

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 数据库连接串
    pub database_url: String,
    /// 最大连接数
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }
}

/// 数据库连接池
pub type DbPool = Pool<Sqlite>;

/// sqlx 错误统一映射为仓储错误
pub(crate) fn db_error(err: sqlx::Error) -> RepositoryError {
    RepositoryError::DatabaseError(err.to_string())
}

/// `IN (...)` 占位符
pub(crate) fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

/// 创建数据库连接池
///
/// PRAGMA 通过连接选项下发，池中每个连接建立时都会执行
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        // WAL 模式，允许并发读写
        .journal_mode(SqliteJournalMode::Wal)
        // 遇到锁时等待而不是立即失败
        .busy_timeout(Duration::from_millis(5000))
        .synchronous(SqliteSynchronous::Normal);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "SQLite pool created with WAL mode and busy_timeout=5000ms"
    );

    Ok(pool)
}

/// 运行数据库迁移
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    // 创建 authors 表
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS authors (
            id TEXT PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 创建 articles 表
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS articles (
            id TEXT PRIMARY KEY,
            header TEXT NOT NULL,
            description TEXT NOT NULL,
            text TEXT NOT NULL,
            publish_date TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 创建 article_keywords 表
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS article_keywords (
            article_id TEXT NOT NULL,
            keyword TEXT NOT NULL,
            PRIMARY KEY (article_id, keyword),
            FOREIGN KEY (article_id) REFERENCES articles(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 创建 author_article 关联表
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS author_article (
            article_id TEXT NOT NULL,
            author_id TEXT NOT NULL,
            PRIMARY KEY (article_id, author_id),
            FOREIGN KEY (article_id) REFERENCES articles(id) ON DELETE CASCADE,
            FOREIGN KEY (author_id) REFERENCES authors(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 创建索引
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_articles_publish_date
        ON articles(publish_date)
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_article_keywords_keyword
        ON article_keywords(keyword)
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_author_article_author_id
        ON author_article(author_id)
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database migrations completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_in_memory_db() {
        let config = DatabaseConfig::in_memory();
        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        // 迁移可重复执行
        run_migrations(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_pragmas_apply_to_every_connection() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            database_url: format!("sqlite://{}?mode=rwc", dir.path().join("news.db").display()),
            max_connections: 2,
        };
        let pool = create_pool(&config).await.unwrap();

        // 同时持有两个连接，确保检查的是不同的物理连接
        let mut first = pool.acquire().await.unwrap();
        let mut second = pool.acquire().await.unwrap();
        for conn in [&mut first, &mut second] {
            let timeout: i64 = sqlx::query_scalar("PRAGMA busy_timeout")
                .fetch_one(&mut **conn)
                .await
                .unwrap();
            assert_eq!(timeout, 5000);

            let synchronous: i64 = sqlx::query_scalar("PRAGMA synchronous")
                .fetch_one(&mut **conn)
                .await
                .unwrap();
            assert_eq!(synchronous, 1);

            let mode: String = sqlx::query_scalar("PRAGMA journal_mode")
                .fetch_one(&mut **conn)
                .await
                .unwrap();
            assert_eq!(mode, "wal");
        }
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(placeholders(3), "?, ?, ?");
        assert_eq!(placeholders(1), "?");
    }
}
