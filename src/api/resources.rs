use std::sync::Arc;

use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use serde_json::Value;

use crate::{config::Config, error::ApiError, spotify};

/// Query parameters accepted by the proxy routes.
///
/// One shared struct instead of one per route: every field is optional at the
/// deserialization layer and presence is checked per route, so a missing
/// parameter yields a clean 400 instead of a rejection.
#[derive(Debug, Deserialize)]
pub struct ResourceQuery {
    pub token: Option<String>,
    #[serde(rename = "playlistID")]
    pub playlist_id: Option<String>,
    #[serde(rename = "trackID")]
    pub track_id: Option<String>,
}

impl ResourceQuery {
    fn token(&self) -> Result<&str, ApiError> {
        self.token.as_deref().ok_or(ApiError::MissingParam("token"))
    }

    fn playlist_id(&self) -> Result<&str, ApiError> {
        self.playlist_id
            .as_deref()
            .ok_or(ApiError::MissingParam("playlistID"))
    }

    fn track_id(&self) -> Result<&str, ApiError> {
        self.track_id
            .as_deref()
            .ok_or(ApiError::MissingParam("trackID"))
    }
}

/// `GET /genres?token=` - available genre seeds.
pub async fn genres(
    Extension(config): Extension<Arc<Config>>,
    Query(params): Query<ResourceQuery>,
) -> Result<Json<Value>, ApiError> {
    let body = spotify::resources::genre_seeds(&config, params.token()?).await?;
    Ok(Json(body))
}

/// `GET /playlists?token=` - the configured user's playlists (`items` only).
pub async fn playlists(
    Extension(config): Extension<Arc<Config>>,
    Query(params): Query<ResourceQuery>,
) -> Result<Json<Value>, ApiError> {
    let body = spotify::resources::user_playlists(&config, params.token()?).await?;
    Ok(Json(body))
}

/// `GET /playlist?token=&playlistID=` - one playlist, relayed verbatim.
pub async fn playlist(
    Extension(config): Extension<Arc<Config>>,
    Query(params): Query<ResourceQuery>,
) -> Result<Json<Value>, ApiError> {
    let body =
        spotify::resources::playlist(&config, params.token()?, params.playlist_id()?).await?;
    Ok(Json(body))
}

/// `GET /tracklist?token=&playlistID=` - the tracks of a playlist.
pub async fn tracklist(
    Extension(config): Extension<Arc<Config>>,
    Query(params): Query<ResourceQuery>,
) -> Result<Json<Value>, ApiError> {
    let body =
        spotify::resources::playlist_tracks(&config, params.token()?, params.playlist_id()?)
            .await?;
    Ok(Json(body))
}

/// `GET /song?token=&trackID=` - one track, relayed verbatim.
pub async fn song(
    Extension(config): Extension<Arc<Config>>,
    Query(params): Query<ResourceQuery>,
) -> Result<Json<Value>, ApiError> {
    let body = spotify::resources::track(&config, params.token()?, params.track_id()?).await?;
    Ok(Json(body))
}
