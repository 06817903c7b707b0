//! Article Context - Errors

use thiserror::Error;

use crate::domain::validation::ConstraintViolation;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArticleError {
    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),

    #[error("authors: Invalid uuid {0}")]
    InvalidAuthorReference(String),
}
