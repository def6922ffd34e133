//! Error types for the riftdex backend core.
//!
//! A single root [`Error`] aggregates domain errors and external library
//! errors via `thiserror`'s `#[from]`/`transparent` nesting, so service code
//! can propagate everything with `?`.

pub mod config;
pub mod resolve;

use thiserror::Error;

use crate::error::{config::ConfigError, resolve::ResolveError};

#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Identity resolution error (unknown player or team name).
    #[error(transparent)]
    ResolveError(#[from] ResolveError),
    /// Malformed caller input, rejected before any lookup runs.
    #[error("Entity name must not be blank, got {0:?}")]
    InvalidName(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
