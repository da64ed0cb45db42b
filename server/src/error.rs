//! Startup and serving errors.

use std::net::SocketAddr;

/// Errors produced while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid `u16`.
    #[error("invalid PORT {value:?}: expected a number between 0 and 65535")]
    InvalidPort { value: String },

    /// `HOST` is set but is not an IP address.
    #[error("invalid HOST {value:?}: expected an IP address")]
    InvalidHost { value: String },
}

/// Errors that stop the server from starting or keep it from serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The Leptos configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
