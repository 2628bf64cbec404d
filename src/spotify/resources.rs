use reqwest::{StatusCode, header};
use serde_json::Value;

use crate::{config::Config, error::ApiError, warning};

/// Issues one authenticated GET against the Web API and returns the JSON body.
///
/// Every proxied route funnels through here: same headers, same timeout, same
/// error mapping. A non-2xx answer surfaces as [`ApiError::UpstreamResource`]
/// with the upstream status; nothing is retried.
pub async fn get_json(url: &str, token: &str) -> Result<Value, ApiError> {
    let client = super::http_client().map_err(transport)?;
    let response = client
        .get(url)
        .header(header::ACCEPT, "application/json")
        .header(header::CONTENT_TYPE, "application/json")
        .bearer_auth(token)
        .send()
        .await
        .map_err(transport)?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::UpstreamResource {
            status: Some(status.as_u16()),
            message: upstream_message(status, &body),
        });
    }

    response.json::<Value>().await.map_err(transport)
}

/// Fetches the available genre seeds.
pub async fn genre_seeds(config: &Config, token: &str) -> Result<Value, ApiError> {
    get_json(&config.genre_url, token).await
}

/// Lists the configured user's playlists, relaying only the `items` array.
pub async fn user_playlists(config: &Config, token: &str) -> Result<Value, ApiError> {
    let url = format!(
        "{api_url}/users/{user_id}/playlists?limit=21&offset=0",
        api_url = config.api_url,
        user_id = config.user_id,
    );
    let mut page = get_json(&url, token).await?;

    // Callers want the playlist summaries, not the pagination envelope.
    Ok(page.get_mut("items").map(Value::take).unwrap_or_default())
}

/// Fetches a single playlist by ID.
pub async fn playlist(config: &Config, token: &str, playlist_id: &str) -> Result<Value, ApiError> {
    let url = format!("{}/playlists/{}", config.api_url, playlist_id);
    get_json(&url, token).await
}

/// Fetches the tracks of a playlist.
pub async fn playlist_tracks(
    config: &Config,
    token: &str,
    playlist_id: &str,
) -> Result<Value, ApiError> {
    let url = format!("{}/playlists/{}/tracks", config.api_url, playlist_id);
    get_json(&url, token).await
}

/// Fetches a single track by ID.
pub async fn track(config: &Config, token: &str, track_id: &str) -> Result<Value, ApiError> {
    let url = format!("{}/tracks/{}", config.api_url, track_id);
    get_json(&url, token).await
}

// Transport failures carry no upstream status and are logged on their own so
// they can be told apart from 4xx/5xx answers in the server log.
fn transport(err: reqwest::Error) -> ApiError {
    warning!("transport failure talking to resource API: {}", err);
    ApiError::UpstreamResource {
        status: None,
        message: err.to_string(),
    }
}

// The Web API wraps failures as {"error": {"status": ..., "message": ...}}.
fn upstream_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| format!("upstream responded with {}", status))
}
