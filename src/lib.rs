//! cardsgame: card decks over HTTP
//!
//! Layers, innermost first:
//! - [`domain`]: cards, decks and card set building
//! - [`infrastructure`]: deck storage and service wiring
//! - [`application`]: the deck service and its error taxonomy
//! - [`api`]: axum routes translating HTTP to service calls
//! - [`cli`]: command line entry points

pub mod api;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
