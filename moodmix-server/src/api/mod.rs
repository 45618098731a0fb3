//! HTTP API handlers for moodmix-server

pub mod health;
pub mod playlist;
pub mod ui;

pub use health::health_routes;
pub use playlist::create_playlist;
pub use ui::{serve_app_js, serve_index};
