//! Playlist data model
//!
//! These are the shapes exchanged over `POST /playlist` and the shape the
//! text-generation API is asked to produce.

use serde::{Deserialize, Serialize};

/// A single playlist entry
///
/// All three fields are plain text. Nothing beyond presence is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub artist: String,
    pub description: String,
}

impl Song {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            description: description.into(),
        }
    }
}

/// Body of `POST /playlist`
///
/// Both fields are free-form; the resolver lower-cases them for lookup.
/// Missing fields deserialize as empty strings, which the resolver treats
/// as unknown keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistRequest {
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub genre: String,
}

impl PlaylistRequest {
    pub fn new(mood: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            mood: mood.into(),
            genre: genre.into(),
        }
    }
}
