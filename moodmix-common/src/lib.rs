//! # moodmix Common Library
//!
//! Shared code for the moodmix playlist service:
//! - Playlist data model (`Song`, `PlaylistRequest`)
//! - Common error type
//! - Bootstrap configuration loading and API key resolution

pub mod config;
pub mod error;
pub mod models;

pub use error::{Error, Result};
pub use models::{PlaylistRequest, Song};
