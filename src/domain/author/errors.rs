//! Author Context - Errors

use thiserror::Error;

use crate::domain::validation::ConstraintViolation;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorError {
    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),
}
