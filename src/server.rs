use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{api, config::Config, error, info};

/// Builds the full route table over a resolved configuration.
///
/// Split out from [`start_api_server`] so integration tests can drive the
/// router directly without binding a socket.
pub fn router(config: Arc<Config>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/token", get(api::token))
        .route("/genres", get(api::genres))
        .route("/playlists", get(api::playlists))
        .route("/playlist", get(api::playlist))
        .route("/tracklist", get(api::tracklist))
        .route("/song", get(api::song))
        .layer(Extension(config))
}

pub async fn start_api_server(config: Config) {
    let addr = match SocketAddr::from_str(&config.server_addr) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let app = router(Arc::new(config));

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    info!("Listening on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
