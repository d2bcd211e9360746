#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

//! # Watershed Policies
//!
//! Policy and partitioning data model for the Watershed pub/sub platform:
//! the value types a broker, admin tool, or metadata store exchanges to
//! describe what a namespace allows and how its topics are spread across
//! brokers.
//!
//! ## Features
//!
//! - **Role-based grants**: Namespace-wide and per-topic permission maps
//! - **Bundle partitioning**: Hash-range boundaries with explicit validation
//! - **Schema evolution**: Old and new record shapes decode each other's data
//! - **Value semantics**: Plain data types compared with `==`, no hidden state
//!
//! ## Quick Start
//!
//! ```
//! use std::collections::BTreeSet;
//! use watershed_policies::{codec, AuthAction, BundlesData, Policies};
//!
//! let mut policies = Policies::new();
//! policies
//!     .auth_policies
//!     .grant_namespace("ingest-service", BTreeSet::from([AuthAction::Produce]));
//! policies.bundles = Some(BundlesData::uniform(16)?);
//!
//! let bytes = codec::encode(&policies)?;
//! let decoded: Policies = codec::decode(&bytes)?;
//! assert_eq!(decoded, policies);
//! # Ok::<(), watershed_policies::PolicyError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`policies`]: Namespace, tenant, and bundle record types
//! - [`codec`]: JSON wire encoding and decoding
//! - [`error`]: Error types and Result alias
//!
//! ## Wire compatibility
//!
//! Records decode leniently and encode canonically: unknown fields are
//! dropped, absent optional fields take their documented defaults, and a
//! known field of the wrong type fails the whole decode. See
//! [`policies::namespace`] for the exact rules relied on across schema
//! versions.

// Deny .unwrap() in production code so a malformed policy record can never
// panic the process that loads it. Test code is exempt.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]

pub mod codec;
pub mod error;
pub mod policies;

pub use error::{PolicyError, Result};
pub use policies::{
    AuthAction, AuthPolicies, BacklogPolicy, BacklogQuota, BacklogQuotaType, BundlesData,
    OldPolicies, PersistencePolicies, Policies, TenantInfo, TopicGrants, FIRST_BOUNDARY,
    LAST_BOUNDARY,
};
