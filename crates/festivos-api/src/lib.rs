//! # festivos-api
//!
//! The REST boundary over the festivos holiday service: path-parameter
//! parsing, the accepted-year window, and JSON shaping.  All actual
//! holiday logic lives in `festivos-calendar`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Server configuration.
pub mod config;

/// API error types.
pub mod error;

/// Routes and handlers.
pub mod rest;

pub use config::ServerConfig;
pub use rest::{create_router, AppState};
