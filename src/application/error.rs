//! Application-level errors (service boundary)

use thiserror::Error;
use uuid::Uuid;

use crate::domain::DomainError;
use crate::infrastructure::RepositoryError;

/// Errors surfaced by the deck service to the transport layer.
///
/// Domain and repository errors are translated into these, one kind each;
/// they are never wrapped or exposed raw.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("invalid card code: {0}")]
    InvalidCardCode(String),

    #[error("deck not found: {0}")]
    DeckNotFound(Uuid),

    #[error("card {code} not found in deck {deck}")]
    CardNotFound { deck: Uuid, code: String },

    #[error("invalid amount of cards: {0}")]
    InvalidAmount(i64),

    #[error("not enough cards left: requested {requested}, remaining {remaining}")]
    NotEnoughCards { requested: usize, remaining: usize },

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

impl From<DomainError> for ApplicationError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidCardCode(code) => ApplicationError::InvalidCardCode(code),
        }
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound(id) => ApplicationError::DeckNotFound(id),
            RepositoryError::CardNotFound { deck, code } => {
                ApplicationError::CardNotFound { deck, code }
            }
            RepositoryError::InvalidParameters(amount) => ApplicationError::InvalidAmount(amount),
            RepositoryError::Truncate {
                requested,
                remaining,
            } => ApplicationError::NotEnoughCards {
                requested,
                remaining,
            },
        }
    }
}
