//! Configuration management for the playlistify backend.
//!
//! All settings come from environment variables, optionally seeded from a
//! `.env` file in the working directory. The whole configuration is resolved
//! once at startup into a [`Config`] value that is handed to every request
//! handler by reference; request logic never reads the environment itself.

use std::env;

/// Listen address used when `SERVER_ADDRESS` is not set.
const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:3001";

/// Loads environment variables from a `.env` file in the working directory.
///
/// A missing file is not an error: deployments may configure the process
/// entirely through real environment variables, which always take precedence
/// over `.env` entries.
pub fn load_env() {
    let _ = dotenv::dotenv();
}

/// Resolved process configuration.
///
/// Everything the server needs to talk to the Spotify accounts service and
/// Web API: the confidential client credentials, the OAuth endpoints and
/// parameters, the resource API locations, and the local listen address.
#[derive(Debug, Clone)]
pub struct Config {
    /// Client ID issued when registering the application with Spotify.
    pub client_id: String,
    /// Client secret paired with [`Config::client_id`]. Never sent to the browser.
    pub client_secret: String,
    /// Callback URL registered for the authorization-code flow.
    pub redirect_uri: String,
    /// Scope requested during user authorization.
    pub scope: String,
    /// Authorization endpoint users are redirected to on `/login`.
    pub auth_url: String,
    /// Token endpoint used for both grant types.
    pub token_url: String,
    /// Web API base URL for playlist and track lookups.
    pub api_url: String,
    /// Genre-seeds endpoint backing `/genres`.
    pub genre_url: String,
    /// User whose playlists `/playlists` lists.
    pub user_id: String,
    /// Address and port the HTTP server binds to.
    pub server_addr: String,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// Returns an error naming the first missing variable. `SERVER_ADDRESS`
    /// is the only optional setting and falls back to `0.0.0.0:3001`.
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            client_id: require("SPOTIFY_API_AUTH_CLIENT_ID")?,
            client_secret: require("SPOTIFY_API_AUTH_CLIENT_SECRET")?,
            redirect_uri: require("SPOTIFY_API_REDIRECT_URI")?,
            scope: require("SPOTIFY_API_AUTH_SCOPE")?,
            auth_url: require("SPOTIFY_API_AUTH_URL")?,
            token_url: require("SPOTIFY_API_TOKEN_URL")?,
            api_url: require("SPOTIFY_API_URL")?,
            genre_url: require("SPOTIFY_API_GENRE_URL")?,
            user_id: require("SPOTIFY_USER_ID")?,
            server_addr: env::var("SERVER_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string()),
        })
    }
}

fn require(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("{} must be set", name))
}
