//! SQLite Author Repository

use async_trait::async_trait;
use sqlx::FromRow;
use uuid::Uuid;

use super::{db_error, placeholders, DbPool};
use crate::application::ports::{AuthorRecord, AuthorRepositoryPort, RepositoryError};

/// SQLite Author Repository
pub struct SqliteAuthorRepository {
    pool: DbPool,
}

impl SqliteAuthorRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct AuthorRow {
    id: String,
    first_name: String,
    last_name: String,
}

impl TryFrom<AuthorRow> for AuthorRecord {
    type Error = RepositoryError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        Ok(AuthorRecord {
            id: Uuid::parse_str(&row.id)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            first_name: row.first_name,
            last_name: row.last_name,
        })
    }
}

#[async_trait]
impl AuthorRepositoryPort for SqliteAuthorRepository {
    async fn save(&self, author: &AuthorRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO authors (id, first_name, last_name)
            VALUES (?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                first_name = excluded.first_name,
                last_name = excluded.last_name
            "#,
        )
        .bind(author.id.to_string())
        .bind(&author.first_name)
        .bind(&author.last_name)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AuthorRecord>, RepositoryError> {
        let row: Option<AuthorRow> =
            sqlx::query_as("SELECT id, first_name, last_name FROM authors WHERE id = ?")
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;

        row.map(AuthorRecord::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<AuthorRecord>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "SELECT id, first_name, last_name FROM authors WHERE id IN ({}) ORDER BY id",
            placeholders(ids.len())
        );
        let mut query = sqlx::query_as::<_, AuthorRow>(&sql);
        for id in ids {
            query = query.bind(id.to_string());
        }

        let rows = query.fetch_all(&self.pool).await.map_err(db_error)?;
        rows.into_iter().map(AuthorRecord::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};

    async fn repo() -> SqliteAuthorRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteAuthorRepository::new(pool)
    }

    fn author(first: &str) -> AuthorRecord {
        AuthorRecord {
            id: Uuid::new_v4(),
            first_name: first.to_string(),
            last_name: "Krieger".to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = repo().await;
        let max = author("Max");
        repo.save(&max).await.unwrap();

        assert_eq!(repo.find_by_id(max.id).await.unwrap(), Some(max.clone()));
        assert_eq!(repo.find_by_id(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_author() {
        let repo = repo().await;
        let mut max = author("Max");
        repo.save(&max).await.unwrap();

        max.first_name = "Maximilian".to_string();
        repo.save(&max).await.unwrap();

        let stored = repo.find_by_id(max.id).await.unwrap().unwrap();
        assert_eq!(stored.first_name, "Maximilian");
    }

    #[tokio::test]
    async fn test_find_by_ids_skips_unknown() {
        let repo = repo().await;
        let max = author("Max");
        let anna = author("Anna");
        repo.save(&max).await.unwrap();
        repo.save(&anna).await.unwrap();

        let found = repo
            .find_by_ids(&[max.id, Uuid::new_v4(), anna.id])
            .await
            .unwrap();
        assert_eq!(found.len(), 2);
        assert!(repo.find_by_ids(&[]).await.unwrap().is_empty());
    }
}
