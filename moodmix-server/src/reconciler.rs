//! Turns free-text model output into songs
//!
//! The model is asked for a bare JSON array but often wraps it in prose.
//! The span from the first `[` to the last `]` is taken as the candidate
//! array; this over-matches when the text holds several arrays, in which
//! case parsing fails and the caller falls back to the catalog.
//!
//! Reconciliation is a pure parsing step. It never consults the catalog.

use moodmix_common::Song;
use thiserror::Error;

/// Reconciliation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReconcileError {
    /// The text held no usable song array
    #[error("No structured data: {0}")]
    NoStructuredData(String),
}

/// Extract a song array from raw model output
pub fn reconcile(raw: &str) -> Result<Vec<Song>, ReconcileError> {
    let span = extract_array_span(raw.trim())
        .ok_or_else(|| ReconcileError::NoStructuredData("no bracketed array".to_string()))?;

    // Typed parse: a non-array, or an element missing a field, is a mismatch
    let songs: Vec<Song> = serde_json::from_str(span)
        .map_err(|e| ReconcileError::NoStructuredData(format!("invalid song array: {}", e)))?;

    if songs.is_empty() {
        return Err(ReconcileError::NoStructuredData("empty array".to_string()));
    }

    Ok(songs)
}

/// First `[` through last `]`, inclusive
fn extract_array_span(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
