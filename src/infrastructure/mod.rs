//! Infrastructure layer: storage implementations and DI container
//!
//! This layer implements the storage boundary traits and wires up services.

pub mod di;
pub mod error;
pub mod memory;
pub mod traits;

pub use error::{RepositoryError, RepositoryResult};
pub use memory::MemoryDeckRepository;
