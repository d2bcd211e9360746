//! Error types for watershed-policies
//!
//! Failures split into two classes: decode errors, raised when the JSON
//! wire form of a record cannot be mapped onto its declared schema, and
//! validation errors, raised only when bundle boundaries are explicitly
//! checked. Constructing or mutating a record in memory never fails.

use thiserror::Error;

/// Result type alias for policy operations
pub type Result<T> = std::result::Result<T, PolicyError>;

/// Error type for policy decode and validation failures
#[derive(Debug, Error)]
pub enum PolicyError {
    /// A record could not be decoded from its JSON wire form. Raised for
    /// malformed JSON and for known fields carrying a value of the wrong
    /// type; a decode never partially succeeds.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A bundle boundary list failed validation
    #[error("Invalid bundle boundaries: {0}")]
    InvalidBundles(String),
}
