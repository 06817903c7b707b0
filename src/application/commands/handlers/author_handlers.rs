//! Author Command Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{GenerateAuthorId, SaveAuthor};
use crate::application::error::ApplicationError;
use crate::application::ports::{AuthorRecord, AuthorRepositoryPort};
use crate::application::queries::handlers::AuthorView;
use crate::domain::author::{Author, AuthorId};
use crate::domain::identifier::{generate_id, same_identifier};
use crate::domain::validation::required;

/// GenerateAuthorId Handler
#[derive(Debug, Default)]
pub struct GenerateAuthorIdHandler;

impl GenerateAuthorIdHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, _cmd: GenerateAuthorId) -> Uuid {
        let id = generate_id();
        tracing::debug!(author_id = %id, "Author id issued");
        id
    }
}

/// SaveAuthor Handler
pub struct SaveAuthorHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl SaveAuthorHandler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    pub async fn handle(&self, cmd: SaveAuthor) -> Result<AuthorView, ApplicationError> {
        let body_id = required("id", cmd.body_id)?;
        if !same_identifier(&cmd.path_id, &body_id) {
            return Err(ApplicationError::identifier_mismatch("Author", cmd.author_id));
        }

        let author = Author::from_draft(AuthorId::from_uuid(cmd.author_id), cmd.draft)?;
        let record = AuthorRecord::from(&author);
        self.author_repo.save(&record).await?;

        tracing::info!(author_id = %record.id, "Author saved");
        Ok(AuthorView::from(record))
    }
}
