use reqwest::{StatusCode, header};
use serde_json::Value;

use crate::{config::Config, error::ApiError, types::TokenResponse, utils, warning};

/// Builds the authorization URL a `/login` caller is redirected to.
///
/// The `state` value must be the freshly generated anti-forgery token; the
/// authorization server echoes it back on the callback where it is checked
/// against the cookie.
pub fn authorize_url(config: &Config, state: &str) -> String {
    format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}&state={state}",
        auth_url = config.auth_url,
        client_id = config.client_id,
        redirect_uri = config.redirect_uri,
        scope = config.scope,
        state = state,
    )
}

/// Exchanges an authorization code for an access/refresh token pair.
///
/// Issues a single POST to the token endpoint with
/// `grant_type=authorization_code`, authenticating the client via the Basic
/// credentials header rather than form parameters. Never retried: any non-2xx
/// answer or transport failure surfaces as [`ApiError::UpstreamAuth`].
pub async fn exchange_code(config: &Config, code: &str) -> Result<TokenResponse, ApiError> {
    let client = super::http_client().map_err(transport)?;
    let response = client
        .post(&config.token_url)
        .header(
            header::AUTHORIZATION,
            utils::basic_auth(&config.client_id, &config.client_secret),
        )
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
        ])
        .send()
        .await
        .map_err(transport)?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::UpstreamAuth {
            status: Some(status.as_u16()),
            message: token_error_message(status, &body),
        });
    }

    response.json::<TokenResponse>().await.map_err(transport)
}

/// Fetches an app-only access token via the client-credentials grant.
///
/// Returns the bare access-token string; the rest of the token body is of no
/// use to `/token` callers.
pub async fn client_credentials_token(config: &Config) -> Result<String, ApiError> {
    let client = super::http_client().map_err(transport)?;
    let response = client
        .post(&config.token_url)
        .header(
            header::AUTHORIZATION,
            utils::basic_auth(&config.client_id, &config.client_secret),
        )
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(transport)?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::UpstreamAuth {
            status: Some(status.as_u16()),
            message: token_error_message(status, &body),
        });
    }

    let token = response.json::<TokenResponse>().await.map_err(transport)?;
    Ok(token.access_token)
}

// Transport failures carry no upstream status and are logged on their own so
// they can be told apart from 4xx/5xx answers in the server log.
fn transport(err: reqwest::Error) -> ApiError {
    warning!("transport failure talking to token endpoint: {}", err);
    ApiError::UpstreamAuth {
        status: None,
        message: err.to_string(),
    }
}

// The accounts service reports failures as {"error": "...", "error_description": "..."}.
fn token_error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v["error_description"]
                .as_str()
                .or_else(|| v["error"].as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("token endpoint responded with {}", status))
}
