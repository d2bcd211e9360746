//! Storage persistence settings for a namespace

use serde::{Deserialize, Serialize};

/// Replica-set sizing and write/ack quorums for a namespace's topic
/// storage, plus the throttle applied when persisting consumer cursor
/// positions.
///
/// Absence of this record on a [`Policies`] entry means the broker
/// default applies. Values are not range-checked here; sizing is
/// validated by the storage layer that provisions the ledgers.
///
/// [`Policies`]: crate::policies::Policies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersistencePolicies {
    /// Number of storage nodes each ledger is spread across
    pub ensemble_size: i32,
    /// Copies written before an entry is considered stored
    pub write_quorum: i32,
    /// Acknowledgments required before a write completes
    pub ack_quorum: i32,
    /// Cursor-position persist rate limit in ops/s; `0.0` disables throttling
    pub max_cursor_persist_rate: f64,
}

impl PersistencePolicies {
    /// Create persistence settings with the given sizing and cursor throttle
    pub fn new(
        ensemble_size: i32,
        write_quorum: i32,
        ack_quorum: i32,
        max_cursor_persist_rate: f64,
    ) -> Self {
        Self {
            ensemble_size,
            write_quorum,
            ack_quorum,
            max_cursor_persist_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let persistence = PersistencePolicies::new(3, 2, 2, 50.0);
        let json = serde_json::to_string(&persistence).unwrap();
        assert_eq!(
            json,
            r#"{"ensemble_size":3,"write_quorum":2,"ack_quorum":2,"max_cursor_persist_rate":50.0}"#
        );

        let decoded: PersistencePolicies = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, persistence);
    }

    #[test]
    fn test_integer_rate_decodes_as_float() {
        let json = r#"{"ensemble_size":3,"write_quorum":2,"ack_quorum":2,"max_cursor_persist_rate":0}"#;
        let decoded: PersistencePolicies = serde_json::from_str(json).unwrap();
        assert_eq!(decoded, PersistencePolicies::new(3, 2, 2, 0.0));
    }
}
