//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business rule violations in card and deck building.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid card code: {0}")]
    InvalidCardCode(String),
}
