use std::sync::Arc;

use axum::{
    Extension,
    extract::Query,
    response::{Json, Redirect},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;

use crate::{config::Config, error::ApiError, spotify, types::TokenResponse, utils};

/// Cookie carrying the anti-forgery state token between `/login` and `/callback`.
const STATE_COOKIE: &str = "spotify_auth_state";

/// Starts the authorization-code flow.
///
/// Generates a fresh state token, stores it in a cookie and redirects the
/// user-agent to the authorization endpoint. The cookie write is the only
/// side effect.
pub async fn login(Extension(config): Extension<Arc<Config>>, jar: CookieJar) -> (CookieJar, Redirect) {
    let state = utils::generate_state_token();
    let redirect = Redirect::to(&spotify::auth::authorize_url(&config, &state));

    let cookie = Cookie::build((STATE_COOKIE, state))
        .path("/")
        .http_only(true)
        .build();

    (jar.add(cookie), redirect)
}

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
}

/// Completes the authorization-code flow.
///
/// The returned `state` must equal the cookie value; on mismatch the exchange
/// is aborted before any upstream call. On success the upstream token body is
/// relayed to the caller as JSON. The state cookie is single-use and removed
/// either way.
pub async fn callback(
    Extension(config): Extension<Arc<Config>>,
    jar: CookieJar,
    Query(params): Query<CallbackQuery>,
) -> (CookieJar, Result<Json<TokenResponse>, ApiError>) {
    let stored_state = jar.get(STATE_COOKIE).map(|c| c.value().to_string());
    let jar = jar.remove(Cookie::build((STATE_COOKIE, "")).path("/").build());

    (jar, exchange(&config, params, stored_state).await)
}

async fn exchange(
    config: &Config,
    params: CallbackQuery,
    stored_state: Option<String>,
) -> Result<Json<TokenResponse>, ApiError> {
    match (&params.state, &stored_state) {
        (Some(returned), Some(expected)) if returned == expected => {}
        _ => return Err(ApiError::StateMismatch),
    }

    let code = params.code.ok_or(ApiError::MissingParam("code"))?;
    let token = spotify::auth::exchange_code(config, &code).await?;
    Ok(Json(token))
}

/// App-only token fetch via the client-credentials grant.
///
/// Answers with the bare access-token string; failures render as the usual
/// `{"error": message}` envelope.
pub async fn token(Extension(config): Extension<Arc<Config>>) -> Result<String, ApiError> {
    spotify::auth::client_credentials_token(&config).await
}
