//! Playlist generation with guaranteed fallback
//!
//! Flow per request:
//! 1. If a generator is configured, ask it for raw text
//! 2. Reconcile the text into songs
//! 3. On any failure in 1 or 2, resolve from the curated catalog
//!
//! `generate` cannot fail. Which path answered is reported in the outcome
//! and in the logs, never in the response body.

use std::sync::Arc;

use moodmix_common::{PlaylistRequest, Song};
use tracing::{debug, info, warn};

use super::generator::PlaylistGenerator;
use crate::catalog::SongCatalog;
use crate::reconciler::reconcile;
use crate::resolver::{resolve_with_tier, ResolutionTier};

/// Where a playlist came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistSource {
    /// Parsed from model output
    Generated,
    /// Catalog exact match or mood aggregate
    Curated,
    /// Templated placeholders
    Synthetic,
}

impl PlaylistSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaylistSource::Generated => "generated",
            PlaylistSource::Curated => "curated",
            PlaylistSource::Synthetic => "synthetic",
        }
    }
}

/// Songs plus where they came from
#[derive(Debug, Clone)]
pub struct PlaylistOutcome {
    pub songs: Vec<Song>,
    pub source: PlaylistSource,
}

/// Generates playlists, falling back to the catalog on any failure
#[derive(Clone)]
pub struct PlaylistService {
    generator: Option<Arc<dyn PlaylistGenerator>>,
    catalog: &'static SongCatalog,
}

impl PlaylistService {
    /// `generator = None` answers every request from the catalog
    pub fn new(generator: Option<Arc<dyn PlaylistGenerator>>, catalog: &'static SongCatalog) -> Self {
        Self { generator, catalog }
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    pub async fn generate(&self, request: &PlaylistRequest) -> PlaylistOutcome {
        if let Some(songs) = self.try_generate(request).await {
            info!(
                mood = %request.mood,
                genre = %request.genre,
                count = songs.len(),
                source = PlaylistSource::Generated.as_str(),
                "Playlist generated by model"
            );
            return PlaylistOutcome {
                songs,
                source: PlaylistSource::Generated,
            };
        }

        let resolution = resolve_with_tier(self.catalog, &request.mood, &request.genre);
        let source = match resolution.tier {
            ResolutionTier::Exact | ResolutionTier::MoodAggregate => PlaylistSource::Curated,
            ResolutionTier::Synthetic => PlaylistSource::Synthetic,
        };

        info!(
            mood = %request.mood,
            genre = %request.genre,
            tier = resolution.tier.as_str(),
            source = source.as_str(),
            "Using fallback playlist"
        );

        PlaylistOutcome {
            songs: resolution.songs,
            source,
        }
    }

    /// Generation + reconciliation; `None` means fall back
    async fn try_generate(&self, request: &PlaylistRequest) -> Option<Vec<Song>> {
        let Some(generator) = &self.generator else {
            debug!("No generator configured, skipping model call");
            return None;
        };

        let raw = match generator.generate(&request.mood, &request.genre).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(generator = generator.name(), error = %e, "Generation call failed");
                return None;
            }
        };

        match reconcile(&raw) {
            Ok(songs) => Some(songs),
            Err(e) => {
                warn!(generator = generator.name(), error = %e, "Model response parsing failed");
                None
            }
        }
    }
}
