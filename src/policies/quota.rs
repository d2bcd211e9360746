//! Backlog quota configuration
//!
//! A backlog quota caps the unacknowledged message backlog a namespace may
//! accumulate against a given resource, and names the action the broker
//! takes once the cap is reached.

use serde::{Deserialize, Serialize};

/// The resource a backlog quota is accounted against.
///
/// Wire form is the snake_case token, used both as a bare value and as a
/// key in [`Policies::backlog_quota_map`].
///
/// [`Policies::backlog_quota_map`]: crate::policies::Policies::backlog_quota_map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BacklogQuotaType {
    /// Bytes of backlog held in destination storage
    DestinationStorage,
}

/// What the broker does once a backlog quota is exceeded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BacklogPolicy {
    /// Hold producer requests until the backlog drains
    ProducerRequestHold,
    /// Fail producer requests immediately
    ProducerException,
    /// Evict the oldest backlog entries to make room
    ConsumerBacklogEviction,
}

/// A size limit on unacknowledged backlog, with its enforcement policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacklogQuota {
    /// Maximum backlog in bytes
    pub limit: i64,
    /// Enforcement behavior once the limit is reached
    pub policy: BacklogPolicy,
}

impl BacklogQuota {
    /// Create a quota with the given byte limit and enforcement policy
    pub fn new(limit: i64, policy: BacklogPolicy) -> Self {
        Self { limit, policy }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_wire_tokens() {
        assert_eq!(
            serde_json::to_string(&BacklogQuotaType::DestinationStorage).unwrap(),
            "\"destination_storage\""
        );
        assert_eq!(
            serde_json::to_string(&BacklogPolicy::ProducerRequestHold).unwrap(),
            "\"producer_request_hold\""
        );
        assert_eq!(
            serde_json::to_string(&BacklogPolicy::ConsumerBacklogEviction).unwrap(),
            "\"consumer_backlog_eviction\""
        );
    }

    #[test]
    fn test_quota_round_trip() {
        let quota = BacklogQuota::new(10 * 1024 * 1024, BacklogPolicy::ProducerException);
        let json = serde_json::to_string(&quota).unwrap();
        assert_eq!(json, r#"{"limit":10485760,"policy":"producer_exception"}"#);

        let decoded: BacklogQuota = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, quota);
    }

    #[test]
    fn test_quota_type_as_map_key() {
        let mut quotas = HashMap::new();
        quotas.insert(
            BacklogQuotaType::DestinationStorage,
            BacklogQuota::new(1024, BacklogPolicy::ProducerRequestHold),
        );

        let json = serde_json::to_string(&quotas).unwrap();
        assert_eq!(
            json,
            r#"{"destination_storage":{"limit":1024,"policy":"producer_request_hold"}}"#
        );

        let decoded: HashMap<BacklogQuotaType, BacklogQuota> =
            serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, quotas);
    }

    #[test]
    fn test_unknown_quota_type_fails_decode() {
        let result = serde_json::from_str::<BacklogQuotaType>("\"memory\"");
        assert!(result.is_err());
    }
}
