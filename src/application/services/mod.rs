//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on storage boundary traits (DeckRepository)
//! but are themselves concrete structs, not traits.

mod deck;

pub use deck::DeckService;
