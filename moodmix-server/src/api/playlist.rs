//! Playlist endpoint
//!
//! `POST /playlist` always answers 200 with a song array once the body is
//! valid JSON. Generation failures are absorbed by the playlist service.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use moodmix_common::{PlaylistRequest, Song};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// POST /playlist
///
/// Body: `{ "mood": "...", "genre": "..." }`; missing fields are empty.
pub async fn create_playlist(
    State(state): State<AppState>,
    payload: Result<Json<PlaylistRequest>, JsonRejection>,
) -> ApiResult<Json<Vec<Song>>> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let outcome = state.playlists.generate(&request).await;
    Ok(Json(outcome.songs))
}
