//! Environment-driven configuration.

use std::env;

/// Default HTTP listen port when `PORT` is unset or unparseable.
pub const DEFAULT_PORT: u16 = 8080;

/// Resolve the deployment environment from `ENVIRONMENT`.
///
/// Anything other than `production`/`prod` is treated as sandbox.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Resolve the HTTP listen port from `PORT`.
pub fn get_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
