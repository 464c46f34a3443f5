//! Scope driver and scope provisioning

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use super::cache::ScopeCache;
use super::catalog::SCOPES;
use super::locks::TeammateLocks;
use super::resource::{
    ASSIGNED_ENTITLEMENT, Entitlement, EntitlementRef, Grant, GrantOutcome, Resource, ResourceId,
    ResourceType, RevokeOutcome, scope_assigned_entitlement, scope_grant, scope_resource,
};
use super::{ResourceProvisioner, ResourceSyncer, expect_initial_token, expect_type};
use crate::client::models::{TeammateScope, UpdateTeammatePermissions};
use crate::client::{Page, SendGridApi};
use crate::error::{Error, Result};

/// Lists the scope catalog; grants come from the shared [`ScopeCache`].
///
/// Listing with the initial token rebuilds the cache, so a full pass sees
/// grants computed from one consistent snapshot.
pub struct ScopeSyncer<C> {
    client: Arc<C>,
    cache: Arc<ScopeCache<C>>,
    locks: Arc<TeammateLocks>,
}

impl<C: SendGridApi> ScopeSyncer<C> {
    pub fn new(client: Arc<C>, cache: Arc<ScopeCache<C>>, locks: Arc<TeammateLocks>) -> Self {
        Self {
            client,
            cache,
            locks,
        }
    }

    pub fn cache(&self) -> &ScopeCache<C> {
        &self.cache
    }

    /// Write `detail`'s scope list back upstream with its admin flag unchanged.
    async fn write_scopes(&self, detail: &TeammateScope) -> Result<()> {
        let request = UpdateTeammatePermissions {
            scopes: detail.writable_scopes(),
            is_admin: detail.teammate.is_admin,
        };
        self.client
            .update_teammate_permissions(detail.username(), &request)
            .await
    }
}

/// Extract the scope name from an `assigned` entitlement reference.
fn scope_of(entitlement: &EntitlementRef) -> Result<&str> {
    expect_type(&entitlement.resource, ResourceType::Scope)?;

    if entitlement.slug != ASSIGNED_ENTITLEMENT {
        return Err(Error::Provisioning(format!(
            "unsupported entitlement {}",
            entitlement.id()
        )));
    }

    let scope = entitlement.resource.resource.as_str();
    if scope.is_empty() {
        return Err(Error::Provisioning("scope name is empty".to_string()));
    }
    Ok(scope)
}

#[async_trait]
impl<C: SendGridApi> ResourceSyncer for ScopeSyncer<C> {
    fn resource_type(&self) -> ResourceType {
        ResourceType::Scope
    }

    async fn list(&self, _parent: Option<&ResourceId>, token: &str) -> Result<Page<Resource>> {
        expect_initial_token(token)?;

        self.cache.rebuild().await?;

        let resources = SCOPES.iter().map(|scope| scope_resource(scope)).collect();
        Ok(Page::last(resources))
    }

    fn entitlements(&self, resource: &Resource) -> Vec<Entitlement> {
        vec![scope_assigned_entitlement(resource)]
    }

    async fn grants(&self, resource: &Resource, token: &str) -> Result<Page<Grant>> {
        expect_type(&resource.id, ResourceType::Scope)?;
        expect_initial_token(token)?;

        let scope = &resource.id.resource;
        let members = self.cache.users_for_scope(scope);
        debug!("Scope {} has {} members", scope, members.len());

        let grants = members
            .iter()
            .map(|teammate| scope_grant(scope, teammate.username()))
            .collect();
        Ok(Page::last(grants))
    }
}

#[async_trait]
impl<C: SendGridApi> ResourceProvisioner for ScopeSyncer<C> {
    async fn grant(
        &self,
        principal: &ResourceId,
        entitlement: &Entitlement,
    ) -> Result<GrantOutcome> {
        expect_type(principal, ResourceType::Teammate)?;
        let reference = entitlement.reference();
        let scope = scope_of(&reference)?;
        let username = principal.resource.as_str();

        let _guard = self.locks.lock(username).await;

        let mut detail = self.client.get_teammate(username).await?;
        if !detail.add_scope(scope) {
            info!("Scope {} already granted to teammate {}", scope, username);
            return Ok(GrantOutcome::AlreadyGranted);
        }

        self.write_scopes(&detail).await?;
        info!("Granted scope {} to teammate {}", scope, username);

        Ok(GrantOutcome::Granted(vec![scope_grant(scope, username)]))
    }

    async fn revoke(&self, grant: &Grant) -> Result<RevokeOutcome> {
        expect_type(&grant.principal, ResourceType::Teammate)?;
        let scope = scope_of(&grant.entitlement)?;
        let username = grant.principal.resource.as_str();

        let _guard = self.locks.lock(username).await;

        let mut detail = self.client.get_teammate(username).await?;
        if !detail.remove_scope(scope) {
            info!("Scope {} not held by teammate {}", scope, username);
            return Ok(RevokeOutcome::AlreadyRevoked);
        }

        self.write_scopes(&detail).await?;
        info!("Revoked scope {} from teammate {}", scope, username);

        Ok(RevokeOutcome::Revoked)
    }
}
