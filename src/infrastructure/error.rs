//! Repository-level errors

use thiserror::Error;
use uuid::Uuid;

/// Errors raised by deck storage.
///
/// These never leave the application layer as-is; `DeckService` maps each
/// kind onto exactly one `ApplicationError`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("deck not found: {0}")]
    NotFound(Uuid),

    #[error("card {code} not found in deck {deck}")]
    CardNotFound { deck: Uuid, code: String },

    #[error("invalid amount: {0}")]
    InvalidParameters(i64),

    #[error("requested {requested} cards, only {remaining} left")]
    Truncate { requested: usize, remaining: usize },
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
