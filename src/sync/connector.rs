//! Connector: the drivers wired around one shared client and scope cache.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use serde::Serialize;

use super::cache::ScopeCache;
use super::locks::TeammateLocks;
use super::resource::{
    Entitlement, Grant, GrantOutcome, Resource, ResourceId, ResourceType, RevokeOutcome,
    scope_assigned_entitlement, scope_grant, scope_resource,
};
use super::scope::ScopeSyncer;
use super::subuser::SubuserSyncer;
use super::teammate::TeammateSyncer;
use super::{ResourceProvisioner, ResourceSyncer};
use crate::client::models::TeammateScope;
use crate::client::{Page, SendGridApi};
use crate::config::DEFAULT_DETAIL_CONCURRENCY;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy)]
pub struct ConnectorOptions {
    /// Skip subuser sync entirely
    pub ignore_subusers: bool,
    /// Width of the scope cache detail fan-out
    pub detail_concurrency: usize,
}

impl Default for ConnectorOptions {
    fn default() -> Self {
        Self {
            ignore_subusers: false,
            detail_concurrency: DEFAULT_DETAIL_CONCURRENCY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub display_name: String,
    pub description: String,
}

/// Everything one full pass produced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncSnapshot {
    pub resources: Vec<Resource>,
    pub entitlements: Vec<Entitlement>,
    pub grants: Vec<Grant>,
}

impl SyncSnapshot {
    pub fn resources_of(&self, resource_type: ResourceType) -> impl Iterator<Item = &Resource> {
        self.resources
            .iter()
            .filter(move |r| r.id.resource_type == resource_type)
    }

    pub fn grants_of(&self, resource_type: ResourceType) -> impl Iterator<Item = &Grant> {
        self.grants
            .iter()
            .filter(move |g| g.entitlement.resource.resource_type == resource_type)
    }
}

pub struct Connector<C> {
    client: Arc<C>,
    teammates: TeammateSyncer<C>,
    subusers: SubuserSyncer<C>,
    scopes: ScopeSyncer<C>,
}

impl<C: SendGridApi> Connector<C> {
    pub fn new(client: Arc<C>, options: ConnectorOptions) -> Self {
        let cache = Arc::new(ScopeCache::with_concurrency(
            client.clone(),
            options.detail_concurrency,
        ));
        let locks = Arc::new(TeammateLocks::new());

        Self {
            teammates: TeammateSyncer::new(client.clone(), options.ignore_subusers),
            subusers: SubuserSyncer::new(client.clone(), options.ignore_subusers),
            scopes: ScopeSyncer::new(client.clone(), cache, locks),
            client,
        }
    }

    pub fn metadata(&self) -> Metadata {
        Metadata {
            display_name: "SendGrid".to_string(),
            description: "Syncs SendGrid teammates, subusers and permission scopes.".to_string(),
        }
    }

    /// Exercise the credentials with one teammate page.
    pub async fn validate(&self) -> Result<()> {
        self.client.list_teammates("").await?;
        Ok(())
    }

    /// Drivers in sync order.
    pub fn syncers(&self) -> [&dyn ResourceSyncer; 3] {
        [&self.teammates, &self.subusers, &self.scopes]
    }

    pub fn syncer(&self, resource_type: ResourceType) -> &dyn ResourceSyncer {
        match resource_type {
            ResourceType::Teammate => &self.teammates,
            ResourceType::Subuser => &self.subusers,
            ResourceType::Scope => &self.scopes,
        }
    }

    pub fn scopes(&self) -> &ScopeSyncer<C> {
        &self.scopes
    }

    /// One page of one resource type.
    pub async fn list_page(&self, resource_type: ResourceType, token: &str) -> Result<Page<Resource>> {
        self.syncer(resource_type).list(None, token).await
    }

    /// Walk every driver to completion.
    ///
    /// For each driver, resources are listed until the token runs out; each
    /// resource's entitlements are read and its grants walked to completion.
    pub async fn sync_all(&self) -> Result<SyncSnapshot> {
        let mut snapshot = SyncSnapshot::default();

        for syncer in self.syncers() {
            let resource_type = syncer.resource_type();
            debug!("Syncing {} resources", resource_type);

            let mut token = String::new();
            loop {
                let page = syncer.list(None, &token).await?;
                let done = page.is_last();

                for resource in page.items {
                    snapshot.entitlements.extend(syncer.entitlements(&resource));

                    let mut grant_token = String::new();
                    loop {
                        let grants = syncer.grants(&resource, &grant_token).await?;
                        let grants_done = grants.is_last();
                        snapshot.grants.extend(grants.items);
                        if grants_done {
                            break;
                        }
                        grant_token = grants.next_token;
                    }

                    snapshot.resources.push(resource);
                }

                if done {
                    break;
                }
                token = page.next_token;
            }
        }

        info!(
            "Sync complete: {} resources, {} entitlements, {} grants",
            snapshot.resources.len(),
            snapshot.entitlements.len(),
            snapshot.grants.len()
        );

        Ok(snapshot)
    }

    /// [`Self::sync_all`] bounded by `limit`; in-flight requests are dropped on expiry.
    pub async fn sync_all_within(&self, limit: Duration) -> Result<SyncSnapshot> {
        tokio::time::timeout(limit, self.sync_all())
            .await
            .map_err(|_| Error::TimedOut(limit))?
    }

    /// Grant `scope` to the teammate `username`.
    pub async fn grant_scope(&self, username: &str, scope: &str) -> Result<GrantOutcome> {
        let entitlement = scope_assigned_entitlement(&scope_resource(scope));
        self.scopes
            .grant(&ResourceId::teammate(username), &entitlement)
            .await
    }

    /// Revoke `scope` from the teammate `username`.
    pub async fn revoke_scope(&self, username: &str, scope: &str) -> Result<RevokeOutcome> {
        self.scopes.revoke(&scope_grant(scope, username)).await
    }

    /// Rebuild the scope cache and return the members of `scope`.
    pub async fn scope_members(&self, scope: &str) -> Result<Vec<Arc<TeammateScope>>> {
        let cache = self.scopes.cache();
        cache.rebuild().await?;
        Ok(cache.users_for_scope(scope))
    }
}
