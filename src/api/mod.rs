//! HTTP API: routes, handlers and wire models

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::application::services::DeckService;
use crate::config::Settings;

pub mod error;
mod handlers;
pub mod models;

pub use error::{ApiError, ApiResult};

#[derive(Clone)]
pub(crate) struct AppState {
    service: Arc<DeckService>,
    default_draw_amount: i64,
}

/// HTTP front end for the deck service.
pub struct Api {
    service: Arc<DeckService>,
    settings: Arc<Settings>,
}

impl Api {
    pub fn new(service: Arc<DeckService>, settings: Arc<Settings>) -> Self {
        Self { service, settings }
    }

    pub fn router(&self) -> Router {
        let state = AppState {
            service: self.service.clone(),
            default_draw_amount: self.settings.default_draw_amount,
        };

        let v1 = Router::new()
            .route("/deck", post(handlers::create_deck))
            .route("/deck/:uuid", get(handlers::open_deck))
            .route("/deck/:uuid/cards", get(handlers::draw_cards));

        Router::new()
            .route("/", get(handlers::welcome))
            .route("/healthz", get(handlers::healthz))
            .nest("/api/v1", v1)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Bind to the configured address and serve until Ctrl-C.
    pub async fn serve(&self) -> std::io::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.settings.bind_addr()).await?;
        info!("listening on {}", listener.local_addr()?);
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
