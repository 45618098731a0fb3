//! Services for moodmix-server
//!
//! - `generator`: text-generation seam and its error type
//! - `groq_client`: OpenAI-compatible chat completions client
//! - `playlist_service`: generation → reconciliation → catalog fallback

pub mod generator;
pub mod groq_client;
pub mod playlist_service;

pub use generator::{GenerationError, PlaylistGenerator};
pub use groq_client::GroqClient;
pub use playlist_service::{PlaylistOutcome, PlaylistService, PlaylistSource};
