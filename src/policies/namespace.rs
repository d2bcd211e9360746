//! Namespace policy aggregate and its legacy schema view
//!
//! [`Policies`] is the record the metadata store keeps per namespace. The
//! admin layer builds and mutates it, the store persists the JSON form,
//! and brokers decode it to learn grants, quotas, and bundle boundaries.
//! [`OldPolicies`] is the same record as written before bundle
//! partitioning existed; it decodes the shared fields and drops a
//! `bundles` key, so readers on the old schema keep working against
//! records written by current code.
//!
//! # Wire compatibility
//!
//! - A record without a `bundles` key and a record with `"bundles": null`
//!   decode to equal values; the namespace is simply unpartitioned.
//! - Unknown fields are ignored on decode, so a reader on an older schema
//!   can load records written by a newer one.
//! - A known field carrying a value of the wrong type fails the whole
//!   decode. There is no partial success.

use crate::policies::auth::AuthPolicies;
use crate::policies::bundles::BundlesData;
use crate::policies::persistence::PersistencePolicies;
use crate::policies::quota::{BacklogQuota, BacklogQuotaType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Per-namespace policy record: grants, replication, bundles, quotas,
/// persistence, and message TTL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Policies {
    /// Role grants at namespace and per-topic scope. Required on decode;
    /// a record without it is malformed.
    pub auth_policies: AuthPolicies,

    /// Clusters this namespace replicates to. Stored order is preserved
    /// for display but carries no meaning.
    #[serde(default)]
    pub replication_clusters: Vec<String>,

    /// Hash-range partitioning of the namespace's topics; `None` means the
    /// namespace has not been partitioned yet.
    #[serde(default)]
    pub bundles: Option<BundlesData>,

    /// Backlog caps keyed by the resource they account against
    #[serde(default)]
    pub backlog_quota_map: HashMap<BacklogQuotaType, BacklogQuota>,

    /// Storage replica and quorum settings; `None` means the broker default
    #[serde(default)]
    pub persistence: Option<PersistencePolicies>,

    /// Publish-latency sample rates keyed by stats category
    #[serde(default)]
    pub latency_stats_sample_rate: HashMap<String, u32>,

    /// Message expiry in seconds; `0` means messages never expire
    #[serde(default)]
    pub message_ttl_in_seconds: u32,
}

impl Policies {
    /// Create a policy record with the documented defaults: empty grants,
    /// no replication, unpartitioned, no quotas, broker-default
    /// persistence, no sampling, no expiry.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PartialEq for Policies {
    fn eq(&self, other: &Self) -> bool {
        // Replication cluster order carries no meaning.
        self.auth_policies == other.auth_policies
            && clusters_equal(&self.replication_clusters, &other.replication_clusters)
            && self.bundles == other.bundles
            && self.backlog_quota_map == other.backlog_quota_map
            && self.persistence == other.persistence
            && self.latency_stats_sample_rate == other.latency_stats_sample_rate
            && self.message_ttl_in_seconds == other.message_ttl_in_seconds
    }
}

/// The namespace policy schema as written before bundle partitioning
/// existed: the same fields as [`Policies`] minus `bundles`.
///
/// Kept as its own type rather than a view so old readers have a concrete
/// schema to decode into.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OldPolicies {
    /// Role grants at namespace and per-topic scope. Required on decode.
    pub auth_policies: AuthPolicies,

    /// Clusters this namespace replicates to
    #[serde(default)]
    pub replication_clusters: Vec<String>,

    /// Backlog caps keyed by the resource they account against
    #[serde(default)]
    pub backlog_quota_map: HashMap<BacklogQuotaType, BacklogQuota>,

    /// Storage replica and quorum settings; `None` means the broker default
    #[serde(default)]
    pub persistence: Option<PersistencePolicies>,

    /// Publish-latency sample rates keyed by stats category
    #[serde(default)]
    pub latency_stats_sample_rate: HashMap<String, u32>,

    /// Message expiry in seconds; `0` means messages never expire
    #[serde(default)]
    pub message_ttl_in_seconds: u32,
}

impl OldPolicies {
    /// Create a legacy policy record with the documented defaults
    pub fn new() -> Self {
        Self::default()
    }
}

impl PartialEq for OldPolicies {
    fn eq(&self, other: &Self) -> bool {
        // Same rules as Policies, minus the bundles field.
        self.auth_policies == other.auth_policies
            && clusters_equal(&self.replication_clusters, &other.replication_clusters)
            && self.backlog_quota_map == other.backlog_quota_map
            && self.persistence == other.persistence
            && self.latency_stats_sample_rate == other.latency_stats_sample_rate
            && self.message_ttl_in_seconds == other.message_ttl_in_seconds
    }
}

impl From<OldPolicies> for Policies {
    /// Upgrade a legacy record; the namespace comes through unpartitioned
    fn from(old: OldPolicies) -> Self {
        debug!("upgrading legacy namespace policy record without bundle data");
        Self {
            auth_policies: old.auth_policies,
            replication_clusters: old.replication_clusters,
            bundles: None,
            backlog_quota_map: old.backlog_quota_map,
            persistence: old.persistence,
            latency_stats_sample_rate: old.latency_stats_sample_rate,
            message_ttl_in_seconds: old.message_ttl_in_seconds,
        }
    }
}

/// Multiset comparison of cluster lists; duplicates count, order does not
fn clusters_equal(a: &[String], b: &[String]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut left: Vec<&str> = a.iter().map(String::as_str).collect();
    let mut right: Vec<&str> = b.iter().map(String::as_str).collect();
    left.sort_unstable();
    right.sort_unstable();
    left == right
}
