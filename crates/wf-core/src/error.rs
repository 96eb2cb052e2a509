//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors produced while validating boundary input in `wf-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("unknown metric {0:?}: expected \"distance\" or \"cost\"")]
    UnknownMetric(String),

    #[error("coordinates ({lat}, {lon}) outside -90..=90 / -180..=180")]
    InvalidCoordinates { lat: f64, lon: f64 },
}

/// Shorthand result type for `wf-core`.
pub type CoreResult<T> = Result<T, CoreError>;
