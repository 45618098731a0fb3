//! Text-generation seam
//!
//! The playlist service only needs raw model text for a mood/genre pair.
//! Keeping that behind a trait lets the HTTP layer run against the real
//! client in production and against stubs in tests.

use async_trait::async_trait;
use thiserror::Error;

/// Failures of the external generation call
///
/// Every variant is recovered locally by falling back to the catalog.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Network communication error (includes timeouts)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// API returned a non-success status (auth failures land here)
    #[error("API error {0}: {1}")]
    ApiError(u16, String),

    /// Response body was not the expected completion JSON
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Completion carried no choices
    #[error("Empty response: no completion choices")]
    EmptyResponse,
}

/// Produces raw playlist text for a mood/genre pair
#[async_trait]
pub trait PlaylistGenerator: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Ask the model for a playlist and return its text verbatim
    async fn generate(&self, mood: &str, genre: &str) -> Result<String, GenerationError>;
}
