//! Playlistify backend library.
//!
//! This library implements a small, stateless HTTP backend that brokers
//! OAuth 2.0 flows against the Spotify accounts service and proxies a handful
//! of read-only Web API lookups (genres, playlists, tracks) on behalf of a
//! browser client. Nothing is persisted: tokens pass through to the caller and
//! every request is handled independently.
//!
//! # Modules
//!
//! - `api` - Inbound HTTP handlers (authorization broker, resource proxy, health)
//! - `config` - Configuration loaded once at startup from environment variables
//! - `error` - Request error taxonomy and its HTTP mapping
//! - `server` - Router construction and the listener loop
//! - `spotify` - Outbound calls to the Spotify accounts service and Web API
//! - `types` - Data structures shared between inbound and outbound layers
//! - `utils` - State-token generation and credential encoding helpers

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// Used for startup diagnostics and general status updates. Accepts the same
/// arguments as `println!`.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable conditions that should still be visible in the server
/// log, such as transport failures on outbound calls.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Reserved for unrecoverable startup failures: missing configuration, an
/// unparsable listen address, or a socket that cannot be bound. Code after
/// this macro does not execute.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}
