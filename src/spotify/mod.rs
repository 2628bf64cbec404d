//! # Spotify Integration Module
//!
//! Outbound HTTP layer for the two Spotify services this backend talks to:
//! the accounts service (token grants) and the Web API (resource lookups).
//!
//! ## Core Modules
//!
//! [`auth`] implements the server side of the OAuth 2.0 flows:
//! - **Authorization URL**: builds the redirect target for `/login`,
//!   carrying the client ID, scope, redirect URI and anti-forgery state
//! - **Code Exchange**: trades an authorization code for an access/refresh
//!   token pair, authenticating with the Basic client-credentials header
//! - **Client Credentials**: app-only token fetch backing `/token`
//!
//! [`resources`] implements the read-only Web API lookups:
//! - One generic authenticated GET helper shared by every route
//! - Per-resource functions for genre seeds, playlists, tracks and songs
//!
//! ## Error Handling
//!
//! Nothing here retries. A non-2xx upstream answer is surfaced with its
//! status code and whatever message can be pulled out of the error body; a
//! transport failure (DNS, refused connection, timeout) is logged distinctly
//! and surfaced without a status. Every outbound call carries an explicit
//! 10-second timeout so a hung upstream cannot hang the inbound request
//! forever.

pub mod auth;
pub mod resources;

use std::time::Duration;

use reqwest::Client;

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

fn http_client() -> Result<Client, reqwest::Error> {
    Client::builder().timeout(UPSTREAM_TIMEOUT).build()
}
