//! Shared error types for the services crate.

use thiserror::Error;

use roadmap_core::ParserError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by a `PromptResponder`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResponderError {
    #[error("roadmap generation is not configured")]
    Disabled,
    #[error("roadmap request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Parser(#[from] ParserError),
}
