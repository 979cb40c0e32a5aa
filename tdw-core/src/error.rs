//! Error types for Thema der Woche.
//!
//! Schedule resolution and ICS encoding never fail; these errors come from
//! parsing external data and from validating user input.

use thiserror::Error;

/// Errors that can occur outside the lenient resolve/encode path.
#[derive(Error, Debug)]
pub enum TdwError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Carries the German message shown to the user as-is.
    #[error("{0}")]
    InvalidSetup(String),

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for TdwError {
    fn from(err: serde_json::Error) -> Self {
        TdwError::Serialization(err.to_string())
    }
}

/// Result type alias for Thema der Woche operations.
pub type TdwResult<T> = Result<T, TdwError>;
