//! Tenant-scope administrative settings

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Admin roles and the cluster allow-list for a tenant.
///
/// Tenants sit above namespaces; this record controls who may administer
/// the tenant and which clusters its namespaces may be assigned to. Both
/// collections are sets: granting the same role twice is a no-op, and
/// iteration order is always sorted. Tenant records use camelCase field
/// names on the wire, unlike the namespace-level records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantInfo {
    /// Roles allowed to administer this tenant
    #[serde(rename = "adminRoles", default)]
    pub admin_roles: BTreeSet<String>,

    /// Clusters this tenant's namespaces may be assigned to
    #[serde(rename = "allowedClusters", default)]
    pub allowed_clusters: BTreeSet<String>,
}

impl TenantInfo {
    /// Create a tenant record with the given roles and clusters.
    ///
    /// An empty record is available through `TenantInfo::default()`.
    pub fn new(admin_roles: BTreeSet<String>, allowed_clusters: BTreeSet<String>) -> Self {
        Self {
            admin_roles,
            allowed_clusters,
        }
    }

    /// Replace the admin role set
    pub fn set_admin_roles(&mut self, roles: BTreeSet<String>) {
        self.admin_roles = roles;
    }

    /// Replace the allowed cluster set
    pub fn set_allowed_clusters(&mut self, clusters: BTreeSet<String>) {
        self.allowed_clusters = clusters;
    }

    /// Admin roles in sorted order
    pub fn admin_roles(&self) -> Vec<&str> {
        self.admin_roles.iter().map(String::as_str).collect()
    }

    /// Allowed clusters in sorted order
    pub fn allowed_clusters(&self) -> Vec<&str> {
        self.allowed_clusters.iter().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_constructor_matches_setters() {
        let constructed = TenantInfo::new(roles(&["role1", "role2"]), roles(&["east", "west"]));

        let mut assembled = TenantInfo::default();
        assembled.set_admin_roles(roles(&["role1", "role2"]));
        assembled.set_allowed_clusters(roles(&["east", "west"]));

        assert_eq!(constructed, assembled);
        assert_ne!(constructed, TenantInfo::default());
    }

    #[test]
    fn test_differing_contents_are_unequal() {
        let tenant = TenantInfo::new(roles(&["role1", "role2"]), roles(&["east", "west"]));
        let other_roles = TenantInfo::new(roles(&["role1", "role3"]), roles(&["east", "west"]));
        let other_clusters = TenantInfo::new(roles(&["role1", "role2"]), roles(&["south"]));

        assert_ne!(tenant, other_roles);
        assert_ne!(tenant, other_clusters);
    }

    #[test]
    fn test_accessors_are_sorted() {
        // Insertion order does not leak into the accessor output.
        let tenant = TenantInfo::new(roles(&["zeta", "alpha", "mid"]), roles(&["west", "east"]));
        assert_eq!(tenant.admin_roles(), vec!["alpha", "mid", "zeta"]);
        assert_eq!(tenant.allowed_clusters(), vec!["east", "west"]);
    }

    #[test]
    fn test_duplicate_grant_is_a_no_op() {
        let tenant = TenantInfo::new(roles(&["role1", "role1", "role2"]), roles(&["east"]));
        assert_eq!(tenant.admin_roles(), vec!["role1", "role2"]);
    }

    #[test]
    fn test_wire_form_uses_camel_case() {
        let tenant = TenantInfo::new(roles(&["role1"]), roles(&["east"]));
        let json = serde_json::to_string(&tenant).unwrap();
        assert_eq!(json, r#"{"adminRoles":["role1"],"allowedClusters":["east"]}"#);

        let decoded: TenantInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, tenant);
    }

    #[test]
    fn test_decode_tolerates_missing_fields() {
        let tenant: TenantInfo = serde_json::from_str("{}").unwrap();
        assert_eq!(tenant, TenantInfo::default());

        let tenant: TenantInfo = serde_json::from_str(r#"{"adminRoles":["ops"]}"#).unwrap();
        assert_eq!(tenant.admin_roles(), vec!["ops"]);
        assert!(tenant.allowed_clusters.is_empty());
    }
}
