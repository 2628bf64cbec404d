use base64::{Engine, engine::general_purpose::STANDARD};
use rand::{Rng, distr::Alphanumeric};

/// Length of the anti-forgery state token issued on `/login`.
pub const STATE_TOKEN_LEN: usize = 16;

/// Generates a fresh anti-forgery state token.
///
/// The token binds an authorization request to its callback: it is written to
/// a cookie before the redirect and must be echoed back unchanged by the
/// authorization server.
pub fn generate_state_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_TOKEN_LEN)
        .map(char::from)
        .collect()
}

/// Builds the `Authorization: Basic` header value for token-endpoint calls.
pub fn basic_auth(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", STANDARD.encode(credentials))
}
