//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::DeckService;
use crate::config::Settings;
use crate::infrastructure::traits::DeckRepository;
use crate::infrastructure::MemoryDeckRepository;

/// Container holding all application services.
///
/// The repository is created once here and shared by handle; nothing else
/// owns deck state.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Deck storage
    pub repository: Arc<dyn DeckRepository>,

    /// Deck use cases
    pub deck_service: Arc<DeckService>,
}

impl ServiceContainer {
    /// Create a new service container with in-memory storage.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(MemoryDeckRepository::new()))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, repository: Arc<dyn DeckRepository>) -> Self {
        let settings = Arc::new(settings);
        let deck_service = Arc::new(DeckService::new(repository.clone()));

        Self {
            settings,
            repository,
            deck_service,
        }
    }
}
