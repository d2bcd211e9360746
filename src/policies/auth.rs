//! Role-based grant maps for namespaces and individual topics
//!
//! [`AuthPolicies`] is a pure value holder: it records which roles hold
//! which [`AuthAction`]s, both namespace-wide and per topic. The
//! authorization decision itself is made by the broker-side checker that
//! reads these maps; nothing here evaluates a grant.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// A permission kind that can be granted to a role.
///
/// The wire form is the lowercase token (`"produce"`, `"consume"`,
/// `"functions"`). An unrecognized token fails the decode of the whole
/// record rather than being silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthAction {
    /// Publish messages to topics
    Produce,
    /// Subscribe to topics and receive messages
    Consume,
    /// Deploy and trigger lightweight compute functions
    Functions,
}

impl std::fmt::Display for AuthAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthAction::Produce => write!(f, "produce"),
            AuthAction::Consume => write!(f, "consume"),
            AuthAction::Functions => write!(f, "functions"),
        }
    }
}

/// Role-to-permission grants for a single topic
pub type TopicGrants = BTreeMap<String, BTreeSet<AuthAction>>;

/// Namespace-level and per-topic permission grants.
///
/// `namespace_auth` carries no iteration-order guarantee. `destination_auth`
/// iterates topics and roles in lexicographic order, so serialized records
/// are byte-stable across encodes and diff cleanly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthPolicies {
    /// Role to granted actions, namespace-wide
    #[serde(default)]
    pub namespace_auth: HashMap<String, BTreeSet<AuthAction>>,

    /// Fully-qualified topic to per-role grants
    #[serde(default)]
    pub destination_auth: BTreeMap<String, TopicGrants>,
}

impl AuthPolicies {
    /// Create an empty grant set
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant `actions` to `role` across the whole namespace, replacing any
    /// existing grant for that role.
    pub fn grant_namespace(&mut self, role: impl Into<String>, actions: BTreeSet<AuthAction>) {
        self.namespace_auth.insert(role.into(), actions);
    }

    /// Remove the namespace-wide grant for `role`, returning it if present
    pub fn revoke_namespace(&mut self, role: &str) -> Option<BTreeSet<AuthAction>> {
        self.namespace_auth.remove(role)
    }

    /// Grant `actions` to `role` on a single topic, replacing any existing
    /// grant for that role on that topic.
    pub fn grant_topic(
        &mut self,
        topic: impl Into<String>,
        role: impl Into<String>,
        actions: BTreeSet<AuthAction>,
    ) {
        self.destination_auth
            .entry(topic.into())
            .or_default()
            .insert(role.into(), actions);
    }

    /// Remove the grant for `role` on `topic`, returning it if present.
    ///
    /// The topic entry stays in the map even when its last role is removed;
    /// equality treats an emptied entry and a missing one as the same.
    pub fn revoke_topic(&mut self, topic: &str, role: &str) -> Option<BTreeSet<AuthAction>> {
        self.destination_auth
            .get_mut(topic)
            .and_then(|grants| grants.remove(role))
    }

    /// Topics that currently carry at least one role grant, in
    /// lexicographic order.
    pub fn authorized_topics(&self) -> Vec<&str> {
        self.destination_auth
            .iter()
            .filter(|(_, grants)| !grants.is_empty())
            .map(|(topic, _)| topic.as_str())
            .collect()
    }
}

impl PartialEq for AuthPolicies {
    fn eq(&self, other: &Self) -> bool {
        // A topic entry with no remaining role grants is equivalent to the
        // entry being absent.
        self.namespace_auth == other.namespace_auth
            && self
                .destination_auth
                .iter()
                .filter(|(_, grants)| !grants.is_empty())
                .eq(other
                    .destination_auth
                    .iter()
                    .filter(|(_, grants)| !grants.is_empty()))
    }
}

impl Eq for AuthPolicies {}
