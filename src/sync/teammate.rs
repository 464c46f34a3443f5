//! Teammate driver

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::resource::{
    Entitlement, Grant, Resource, ResourceId, ResourceType, subuser_access_grant,
    teammate_access_entitlement, teammate_resource,
};
use super::{ResourceSyncer, expect_type};
use crate::client::{Page, SendGridApi};
use crate::error::Result;

/// Lists teammates; grants are the subusers each teammate may act on.
///
/// The teammate list uses an offset token while each teammate's grant walk
/// uses an after-id token. The two walks are independent.
pub struct TeammateSyncer<C> {
    client: Arc<C>,
    ignore_subusers: bool,
}

impl<C: SendGridApi> TeammateSyncer<C> {
    pub fn new(client: Arc<C>, ignore_subusers: bool) -> Self {
        Self {
            client,
            ignore_subusers,
        }
    }
}

#[async_trait]
impl<C: SendGridApi> ResourceSyncer for TeammateSyncer<C> {
    fn resource_type(&self) -> ResourceType {
        ResourceType::Teammate
    }

    async fn list(&self, _parent: Option<&ResourceId>, token: &str) -> Result<Page<Resource>> {
        let page = self.client.list_teammates(token).await?;
        Ok(page.map(|teammate| teammate_resource(&teammate)))
    }

    fn entitlements(&self, resource: &Resource) -> Vec<Entitlement> {
        // Subuser access edges would point at principals that are never synced
        if self.ignore_subusers {
            return Vec::new();
        }
        vec![teammate_access_entitlement(resource)]
    }

    async fn grants(&self, resource: &Resource, token: &str) -> Result<Page<Grant>> {
        expect_type(&resource.id, ResourceType::Teammate)?;

        if self.ignore_subusers {
            return Ok(Page::empty());
        }

        let username = &resource.id.resource;
        let page = self
            .client
            .list_teammate_subuser_access(username, token)
            .await?;
        debug!(
            "Teammate {} has access to {} subusers on this page",
            username,
            page.items.len()
        );

        Ok(page.map(|access| subuser_access_grant(&resource.id, &access)))
    }
}
