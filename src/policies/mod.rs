//! Policy data model for namespaces, tenants, and topic bundles
//!
//! Everything in this module is a plain value type: records are built in
//! memory, exchanged with the metadata store through [`crate::codec`],
//! and compared with `==` by admin tooling deciding whether an update
//! changed anything. Enforcement of the policies lives broker-side.

pub mod auth;
pub mod bundles;
pub mod namespace;
pub mod persistence;
pub mod quota;
pub mod tenant;

pub use auth::{AuthAction, AuthPolicies, TopicGrants};
pub use bundles::{BundlesData, FIRST_BOUNDARY, LAST_BOUNDARY};
pub use namespace::{OldPolicies, Policies};
pub use persistence::PersistencePolicies;
pub use quota::{BacklogPolicy, BacklogQuota, BacklogQuotaType};
pub use tenant::TenantInfo;
