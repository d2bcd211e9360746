//! JSON wire codec for policy records
//!
//! The metadata store exchanges every record in this crate as JSON bytes.
//! These helpers are the single place the serde_json boundary is crossed.
//! All schema-compatibility behavior (unknown-field tolerance, the
//! null/absent equivalence for optional fields, required-field checks) is
//! declared on the types themselves; the codec adds no rules of its own.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serialize a policy record to its JSON wire form
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

/// Deserialize a policy record from its JSON wire form.
///
/// Fails when the input is not JSON or a known field carries a value of
/// the wrong type; unknown fields are dropped.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(bytes)?)
}
