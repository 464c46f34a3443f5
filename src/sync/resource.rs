//! Normalized resource, entitlement and grant model handed to the
//! governance platform, plus the mappings from SendGrid records.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Value, json};

use crate::client::models::{Subuser, Teammate, TeammateSubuser};

/// Entitlement slug on a teammate: access to a subuser
pub const ACCESS_ENTITLEMENT: &str = "access";

/// Entitlement slug on a scope: assigned to a teammate
pub const ASSIGNED_ENTITLEMENT: &str = "assigned";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Teammate,
    Subuser,
    Scope,
}

impl ResourceType {
    pub fn id(&self) -> &'static str {
        match self {
            ResourceType::Teammate => "teammate",
            ResourceType::Subuser => "subuser",
            ResourceType::Scope => "scope",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceType::Teammate => "Teammate",
            ResourceType::Subuser => "Subuser",
            ResourceType::Scope => "Scope",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Stable identity of a resource: (type, id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ResourceId {
    pub resource_type: ResourceType,
    pub resource: String,
}

impl ResourceId {
    pub fn new(resource_type: ResourceType, resource: impl Into<String>) -> Self {
        Self {
            resource_type,
            resource: resource.into(),
        }
    }

    pub fn teammate(username: impl Into<String>) -> Self {
        Self::new(ResourceType::Teammate, username)
    }

    pub fn subuser(id: u64) -> Self {
        Self::new(ResourceType::Subuser, id.to_string())
    }

    pub fn scope(name: impl Into<String>) -> Self {
        Self::new(ResourceType::Scope, name)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource_type, self.resource)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Enabled,
    Disabled,
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserStatus::Enabled => f.write_str("enabled"),
            UserStatus::Disabled => f.write_str("disabled"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    pub id: ResourceId,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ResourceId>,
    /// User profile attributes; empty for non-user resources
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub profile: BTreeMap<String, Value>,
    /// User status; `None` for non-user resources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

/// Reference to an entitlement by owning resource and slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EntitlementRef {
    pub resource: ResourceId,
    pub slug: String,
}

impl EntitlementRef {
    pub fn new(resource: ResourceId, slug: impl Into<String>) -> Self {
        Self {
            resource,
            slug: slug.into(),
        }
    }

    /// `"{type}:{resource}:{slug}"`
    pub fn id(&self) -> String {
        format!("{}:{}", self.resource, self.slug)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entitlement {
    pub id: String,
    pub resource: ResourceId,
    pub slug: String,
    pub display_name: String,
    pub description: String,
    pub grantable_to: Vec<ResourceType>,
}

impl Entitlement {
    pub fn reference(&self) -> EntitlementRef {
        EntitlementRef::new(self.resource.clone(), self.slug.clone())
    }
}

/// An edge between a principal and an entitlement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Grant {
    pub id: String,
    pub entitlement: EntitlementRef,
    pub principal: ResourceId,
}

impl Grant {
    pub fn new(entitlement: EntitlementRef, principal: ResourceId) -> Self {
        let id = format!("{}:{}", entitlement.id(), principal);
        Self {
            id,
            entitlement,
            principal,
        }
    }
}

/// Result of a grant request.
#[derive(Debug, Clone, PartialEq)]
pub enum GrantOutcome {
    Granted(Vec<Grant>),
    /// The principal already held the entitlement; nothing was written.
    AlreadyGranted,
}

/// Result of a revoke request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevokeOutcome {
    Revoked,
    /// The principal did not hold the entitlement; nothing was written.
    AlreadyRevoked,
}

// ============================================================================
// Mappings from SendGrid records
// ============================================================================

pub fn teammate_resource(teammate: &Teammate) -> Resource {
    let mut profile = BTreeMap::new();
    profile.insert("username".to_string(), json!(teammate.username));
    profile.insert("email".to_string(), json!(teammate.email));
    profile.insert("first_name".to_string(), json!(teammate.first_name));
    profile.insert("last_name".to_string(), json!(teammate.last_name));
    profile.insert("is_admin".to_string(), json!(teammate.is_admin));
    profile.insert("is_sso".to_string(), json!(teammate.is_sso));
    profile.insert("user_type".to_string(), json!(teammate.user_type));

    Resource {
        id: ResourceId::teammate(&teammate.username),
        display_name: teammate.display_name(),
        parent: None,
        profile,
        status: Some(UserStatus::Enabled),
    }
}

pub fn subuser_resource(subuser: &Subuser) -> Resource {
    let mut profile = BTreeMap::new();
    profile.insert("user_id".to_string(), json!(subuser.id));
    profile.insert("user_name".to_string(), json!(subuser.username));
    profile.insert("email".to_string(), json!(subuser.email));

    let status = if subuser.disabled {
        UserStatus::Disabled
    } else {
        UserStatus::Enabled
    };

    Resource {
        id: ResourceId::subuser(subuser.id),
        display_name: subuser.username.clone(),
        parent: None,
        profile,
        status: Some(status),
    }
}

pub fn scope_resource(scope: &str) -> Resource {
    Resource {
        id: ResourceId::scope(scope),
        display_name: scope.to_string(),
        parent: None,
        profile: BTreeMap::new(),
        status: None,
    }
}

/// "Access to subuser" entitlement on a teammate resource.
pub fn teammate_access_entitlement(teammate: &Resource) -> Entitlement {
    let reference = EntitlementRef::new(teammate.id.clone(), ACCESS_ENTITLEMENT);
    Entitlement {
        id: reference.id(),
        resource: reference.resource,
        slug: reference.slug,
        display_name: format!(
            "{} can access {}",
            teammate.display_name,
            ResourceType::Subuser.display_name()
        ),
        description: format!(
            "{} access to {}",
            ResourceType::Teammate.display_name(),
            ResourceType::Subuser.display_name()
        ),
        grantable_to: vec![ResourceType::Subuser],
    }
}

/// "Assigned" entitlement on a scope resource.
pub fn scope_assigned_entitlement(scope: &Resource) -> Entitlement {
    let reference = EntitlementRef::new(scope.id.clone(), ASSIGNED_ENTITLEMENT);
    Entitlement {
        id: reference.id(),
        resource: reference.resource,
        slug: reference.slug,
        display_name: format!(
            "{} scope {}",
            ResourceType::Teammate.display_name(),
            scope.display_name
        ),
        description: format!(
            "Assigned {} to scopes",
            ResourceType::Teammate.display_name()
        ),
        grantable_to: vec![ResourceType::Teammate],
    }
}

/// Grant edge from a teammate's subuser access entry.
pub fn subuser_access_grant(teammate: &ResourceId, access: &TeammateSubuser) -> Grant {
    Grant::new(
        EntitlementRef::new(teammate.clone(), ACCESS_ENTITLEMENT),
        ResourceId::subuser(access.id),
    )
}

/// Grant edge from a scope to a teammate holding it.
pub fn scope_grant(scope: &str, username: &str) -> Grant {
    Grant::new(
        EntitlementRef::new(ResourceId::scope(scope), ASSIGNED_ENTITLEMENT),
        ResourceId::teammate(username),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{TeammateBuilder, access_entry, test_subuser};

    #[test]
    fn test_identifier_formats() {
        let grant = scope_grant("mail.send", "alice");
        assert_eq!(grant.entitlement.id(), "scope:mail.send:assigned");
        assert_eq!(grant.id, "scope:mail.send:assigned:teammate:alice");
        assert_eq!(grant.principal, ResourceId::teammate("alice"));
    }

    #[test]
    fn test_teammate_resource_is_keyed_by_username() {
        let alice = TeammateBuilder::new("alice").name("Alice", "Liddell").admin().build();
        let resource = teammate_resource(&alice.teammate);

        assert_eq!(resource.id.to_string(), "teammate:alice");
        assert_eq!(resource.display_name, "Alice Liddell");
        assert_eq!(resource.status, Some(UserStatus::Enabled));
        assert_eq!(resource.profile["is_admin"], json!(true));
    }

    #[test]
    fn test_subuser_resource_reflects_disabled_flag() {
        let mut subuser = test_subuser(42, "marketing");
        subuser.disabled = true;
        let resource = subuser_resource(&subuser);

        assert_eq!(resource.id, ResourceId::subuser(42));
        assert_eq!(resource.id.resource, "42");
        assert_eq!(resource.status, Some(UserStatus::Disabled));
        assert_eq!(resource.profile["user_name"], json!("marketing"));
    }

    #[test]
    fn test_scope_resource_has_no_user_trait() {
        let resource = scope_resource("billing.read");
        assert_eq!(resource.id.resource_type, ResourceType::Scope);
        assert!(resource.status.is_none());
        assert!(resource.profile.is_empty());
    }

    #[test]
    fn test_entitlements_are_grantable_to_the_right_principal() {
        let teammate = teammate_resource(&TeammateBuilder::new("bob").build().teammate);
        let access = teammate_access_entitlement(&teammate);
        assert_eq!(access.id, "teammate:bob:access");
        assert_eq!(access.grantable_to, vec![ResourceType::Subuser]);

        let assigned = scope_assigned_entitlement(&scope_resource("mail.send"));
        assert_eq!(assigned.id, "scope:mail.send:assigned");
        assert_eq!(assigned.grantable_to, vec![ResourceType::Teammate]);
        assert_eq!(assigned.display_name, "Teammate scope mail.send");
    }

    #[test]
    fn test_subuser_access_grant_points_at_subuser_id() {
        let grant = subuser_access_grant(&ResourceId::teammate("bob"), &access_entry(9, "eu"));
        assert_eq!(grant.id, "teammate:bob:access:subuser:9");
    }
}
