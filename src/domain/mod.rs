//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no HTTP, no config loading).

pub mod cardset;
pub mod entities;
pub mod error;

pub use cardset::{default_set, set_by_codes, shuffled_set, shuffled_set_with};
pub use entities::*;
pub use error::DomainError;
