//! # API Module
//!
//! Inbound HTTP handlers for the playlistify backend.
//!
//! ## Endpoints
//!
//! ### Authorization broker
//!
//! - [`login`] - Issues the anti-forgery state cookie and redirects the
//!   user-agent to the Spotify authorization endpoint.
//! - [`callback`] - Validates the returned state against the cookie, then
//!   exchanges the authorization code for an access/refresh token pair.
//! - [`token`] - App-only client-credentials token fetch.
//!
//! ### Resource proxy
//!
//! - [`genres`], [`playlists`], [`playlist`], [`tracklist`], [`song`] -
//!   Structurally identical read-only lookups: take a bearer token (plus a
//!   resource ID where needed) from the query string, issue one authenticated
//!   GET upstream, relay the JSON body.
//!
//! ### Monitoring
//!
//! - [`health`] - Liveness probe returning service name and version.
//!
//! ## Architecture
//!
//! Handlers are plain async functions wired up by [`crate::server`]. Each one
//! receives the startup [`crate::config::Config`] through an axum `Extension`
//! and performs at most one outbound call via [`crate::spotify`]. Failures
//! render through [`crate::error::ApiError`] as a JSON error envelope with
//! the upstream status propagated.

mod auth;
mod health;
mod resources;

pub use auth::{callback, login, token};
pub use health::health;
pub use resources::{genres, playlist, playlists, song, tracklist};
