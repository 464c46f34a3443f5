//! Grant and sync summary display models

use serde::Serialize;
use tabled::Tabled;

use crate::sync::{Grant, ResourceType, SyncSnapshot};

/// One grant edge.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct GrantDisplay {
    #[tabled(rename = "ENTITLEMENT")]
    pub entitlement: String,

    #[tabled(rename = "PRINCIPAL")]
    pub principal: String,
}

impl From<&Grant> for GrantDisplay {
    fn from(grant: &Grant) -> Self {
        Self {
            entitlement: grant.entitlement.id(),
            principal: grant.principal.to_string(),
        }
    }
}

/// Per-resource-type counts of a sync pass.
#[derive(Debug, Clone, PartialEq, Eq, Tabled, Serialize)]
pub struct SyncSummaryDisplay {
    #[tabled(rename = "TYPE")]
    #[serde(rename = "type")]
    pub resource_type: String,

    #[tabled(rename = "RESOURCES")]
    pub resources: usize,

    #[tabled(rename = "ENTITLEMENTS")]
    pub entitlements: usize,

    #[tabled(rename = "GRANTS")]
    pub grants: usize,
}

impl SyncSummaryDisplay {
    /// One row per resource type, in sync order
    pub fn rows(snapshot: &SyncSnapshot) -> Vec<Self> {
        [
            ResourceType::Teammate,
            ResourceType::Subuser,
            ResourceType::Scope,
        ]
        .into_iter()
        .map(|resource_type| Self {
            resource_type: resource_type.to_string(),
            resources: snapshot.resources_of(resource_type).count(),
            entitlements: snapshot
                .entitlements
                .iter()
                .filter(|e| e.resource.resource_type == resource_type)
                .count(),
            grants: snapshot.grants_of(resource_type).count(),
        })
        .collect()
    }
}
