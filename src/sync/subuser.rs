//! Subuser driver

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::ResourceSyncer;
use super::resource::{Entitlement, Grant, Resource, ResourceId, ResourceType, subuser_resource};
use crate::client::{Page, SendGridApi};
use crate::error::Result;

/// Lists subusers. Subusers are principals only: no entitlements, no grants.
pub struct SubuserSyncer<C> {
    client: Arc<C>,
    ignore_subusers: bool,
}

impl<C: SendGridApi> SubuserSyncer<C> {
    pub fn new(client: Arc<C>, ignore_subusers: bool) -> Self {
        Self {
            client,
            ignore_subusers,
        }
    }
}

#[async_trait]
impl<C: SendGridApi> ResourceSyncer for SubuserSyncer<C> {
    fn resource_type(&self) -> ResourceType {
        ResourceType::Subuser
    }

    async fn list(&self, _parent: Option<&ResourceId>, token: &str) -> Result<Page<Resource>> {
        if self.ignore_subusers {
            debug!("Subuser sync suppressed by configuration");
            return Ok(Page::empty());
        }

        let page = self.client.list_subusers(token).await?;
        Ok(page.map(|subuser| subuser_resource(&subuser)))
    }

    fn entitlements(&self, _resource: &Resource) -> Vec<Entitlement> {
        Vec::new()
    }

    async fn grants(&self, _resource: &Resource, _token: &str) -> Result<Page<Grant>> {
        Ok(Page::empty())
    }
}
