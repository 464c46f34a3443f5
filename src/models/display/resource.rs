//! Resource display model

use serde::Serialize;
use tabled::Tabled;

use crate::sync::Resource;

/// One synced resource as a table/JSON row.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ResourceDisplay {
    #[tabled(rename = "TYPE")]
    #[serde(rename = "type")]
    pub resource_type: String,

    /// Teammate username, subuser id or scope name
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    /// Enabled/disabled for users, `--` for scopes
    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<&Resource> for ResourceDisplay {
    fn from(resource: &Resource) -> Self {
        let email = resource
            .profile
            .get("email")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or("--")
            .to_string();

        Self {
            resource_type: resource.id.resource_type.to_string(),
            id: resource.id.resource.clone(),
            name: resource.display_name.clone(),
            email,
            status: resource
                .status
                .map(|s| s.to_string())
                .unwrap_or_else(|| "--".to_string()),
        }
    }
}

impl From<Resource> for ResourceDisplay {
    fn from(resource: Resource) -> Self {
        ResourceDisplay::from(&resource)
    }
}
