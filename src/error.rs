//! Error types.
//!
//! Cart operations are total and never fail; errors only arise while building
//! route tables and while starting or running the server.

use std::io;

use thiserror::Error;

/// Errors raised while building a route table.
#[derive(Debug, Error)]
pub enum PagesError {
    /// Pattern source is neither an exact path nor a `/:name(.*)` catch-all.
    #[error("invalid route pattern: {0}")]
    InvalidPattern(String),

    /// A route placed after a catch-all can never match.
    #[error("route {route:?} is unreachable after catch-all {catch_all:?}")]
    UnreachableRoute {
        /// Name of the unreachable route
        route: String,
        /// Name of the catch-all shadowing it
        catch_all: String,
    },

    /// Two routes share a name.
    #[error("duplicate route name: {0}")]
    DuplicateName(String),
}

/// Errors that stop the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Command line or environment configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(#[from] clap::Error),

    /// Log filter directive could not be parsed.
    #[error("invalid log level: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    /// A global logging subscriber was already installed.
    #[error("failed to initialize logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    /// Binding or serving failed.
    #[error("server I/O error: {0}")]
    Io(#[from] io::Error),
}
