//! Deterministic playlist resolution against the curated catalog
//!
//! Three tiers, first applicable wins:
//! 1. **Exact**: `catalog[mood][genre]`
//! 2. **Mood aggregate**: first 5 songs across every genre of the mood
//! 3. **Synthetic**: 5 templated placeholder songs
//!
//! Resolution never fails. Inputs are lower-cased for lookup only; they are
//! not trimmed, and the synthetic tier echoes them exactly as supplied.

use crate::catalog::SongCatalog;
use moodmix_common::Song;

/// Maximum number of songs in a playlist
pub const PLAYLIST_LEN: usize = 5;

/// Artist used for synthetic entries
pub const SYNTHETIC_ARTIST: &str = "Various Artists";

/// Which fallback tier produced a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionTier {
    Exact,
    MoodAggregate,
    Synthetic,
}

impl ResolutionTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionTier::Exact => "exact",
            ResolutionTier::MoodAggregate => "mood_aggregate",
            ResolutionTier::Synthetic => "synthetic",
        }
    }
}

/// Songs plus the tier that produced them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub songs: Vec<Song>,
    pub tier: ResolutionTier,
}

/// Resolve a playlist, discarding tier information
pub fn resolve(catalog: &SongCatalog, mood: &str, genre: &str) -> Vec<Song> {
    resolve_with_tier(catalog, mood, genre).songs
}

/// Resolve a playlist and report which tier answered
pub fn resolve_with_tier(catalog: &SongCatalog, mood: &str, genre: &str) -> Resolution {
    let mood_key = mood.to_lowercase();
    let genre_key = genre.to_lowercase();

    if let Some(songs) = catalog.exact(&mood_key, &genre_key) {
        if !songs.is_empty() {
            return Resolution {
                songs: songs.iter().take(PLAYLIST_LEN).cloned().collect(),
                tier: ResolutionTier::Exact,
            };
        }
    }

    if let Some(all) = catalog.mood_songs(&mood_key) {
        // May be short if the mood has fewer than 5 songs in total; no padding
        let songs: Vec<Song> = all.take(PLAYLIST_LEN).cloned().collect();
        if !songs.is_empty() {
            return Resolution {
                songs,
                tier: ResolutionTier::MoodAggregate,
            };
        }
    }

    Resolution {
        songs: synthesize(mood, genre),
        tier: ResolutionTier::Synthetic,
    }
}

/// Templated placeholder playlist for moods the catalog does not know
pub fn synthesize(mood: &str, genre: &str) -> Vec<Song> {
    let display_genre = capitalize_first(genre);
    (1..=PLAYLIST_LEN)
        .map(|i| {
            Song::new(
                format!("{} Track {}", display_genre, i),
                SYNTHETIC_ARTIST,
                format!("A {} {} song perfect for your mood", mood, genre),
            )
        })
        .collect()
}

/// Upper-case the first character and leave the rest untouched
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
