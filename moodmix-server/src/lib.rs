//! moodmix-server library - mood/genre playlist microservice
//!
//! Answers `POST /playlist` from a text-generation API when one is
//! configured, and from the curated song catalog otherwise.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod catalog;
pub mod error;
pub mod reconciler;
pub mod resolver;
pub mod services;

use catalog::SongCatalog;
use services::{PlaylistGenerator, PlaylistService};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub playlists: PlaylistService,
}

impl AppState {
    /// Create application state over the global catalog
    ///
    /// `generator = None` disables the model call entirely.
    pub fn new(generator: Option<Arc<dyn PlaylistGenerator>>) -> Self {
        Self {
            playlists: PlaylistService::new(generator, SongCatalog::global()),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/playlist", post(api::create_playlist))
        .merge(api::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // The form may be served from another origin during development
        .layer(CorsLayer::permissive())
}

/// Bind the HTTP listener and return the address actually bound
///
/// Port 0 picks an ephemeral port; the returned address has the real one.
pub async fn bind_listener(host: &str, port: u16) -> anyhow::Result<(TcpListener, SocketAddr)> {
    let requested = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&requested)
        .await
        .with_context(|| format!("Failed to bind to {}", requested))?;
    let addr = listener.local_addr()?;
    Ok((listener, addr))
}
