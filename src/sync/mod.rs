//! Resource sync drivers
//!
//! Three independent, pagination-aware producers feed the governance
//! platform:
//! - [`teammate`] - teammates, with subuser access as grants
//! - [`subuser`] - subusers (principals only)
//! - [`scope`] - the static scope catalog, with grants served from the
//!   [`cache::ScopeCache`], plus scope grant/revoke provisioning
//!
//! [`connector::Connector`] wires them together around one shared client.

use async_trait::async_trait;

use crate::client::Page;
use crate::error::{Error, Result};

pub mod cache;
pub mod catalog;
pub mod connector;
pub mod locks;
pub mod resource;
pub mod scope;
pub mod subuser;
pub mod teammate;

pub use cache::{CacheState, ScopeCache};
pub use connector::{Connector, ConnectorOptions, Metadata, SyncSnapshot};
pub use resource::{
    Entitlement, EntitlementRef, Grant, GrantOutcome, Resource, ResourceId, ResourceType,
    RevokeOutcome, UserStatus,
};
pub use scope::ScopeSyncer;
pub use subuser::SubuserSyncer;
pub use teammate::TeammateSyncer;

/// Read side of a driver: list resources, describe their entitlements,
/// list grants on them.
///
/// Tokens are opaque and only meaningful to the call that issued them. An
/// empty token starts a walk; an empty `next_token` ends it.
#[async_trait]
pub trait ResourceSyncer: Send + Sync {
    fn resource_type(&self) -> ResourceType;

    async fn list(&self, parent: Option<&ResourceId>, token: &str) -> Result<Page<Resource>>;

    fn entitlements(&self, resource: &Resource) -> Vec<Entitlement>;

    async fn grants(&self, resource: &Resource, token: &str) -> Result<Page<Grant>>;
}

/// Write side of a driver: add or remove an entitlement edge.
///
/// Both operations are idempotent; a no-op is reported through the outcome,
/// never as an error.
#[async_trait]
pub trait ResourceProvisioner: Send + Sync {
    async fn grant(&self, principal: &ResourceId, entitlement: &Entitlement)
    -> Result<GrantOutcome>;

    async fn revoke(&self, grant: &Grant) -> Result<RevokeOutcome>;
}

/// Fail unless `id` names a resource of type `expected`.
pub(crate) fn expect_type(id: &ResourceId, expected: ResourceType) -> Result<()> {
    if id.resource_type == expected {
        Ok(())
    } else {
        Err(Error::Provisioning(format!(
            "expected a {} resource, got {}",
            expected, id
        )))
    }
}

/// Single-page operations accept only the initial token.
pub(crate) fn expect_initial_token(token: &str) -> Result<()> {
    if token.is_empty() {
        Ok(())
    } else {
        Err(Error::InvalidCursor(token.to_string()))
    }
}
