//! Subuser models

use serde::{Deserialize, Serialize};

/// A subuser account (`GET v3/subusers` returns a bare array of these).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subuser {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub disabled: bool,
}

/// Body for `POST v3/subusers`
#[derive(Debug, Clone, Default, Serialize)]
pub struct SubuserCreate {
    pub username: String,
    pub email: String,
    pub password: String,
    pub ips: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub include_region: bool,
}

/// Body for `PATCH v3/subusers/{username}/website_access`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WebsiteAccessRequest {
    pub disabled: bool,
}

/// One subuser a teammate may act on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeammateSubuser {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub disabled: bool,
    /// `admin` or `restricted`
    pub permission_type: String,
    pub scopes: Vec<String>,
}

/// Parameters for fetching the following page
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NextParams {
    pub limit: Option<u64>,
    pub after_subuser_id: Option<u64>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubuserAccessMetadata {
    pub next_params: NextParams,
}

/// Response of `GET v3/teammates/{username}/subuser_access`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TeammateSubuserAccess {
    pub has_restricted_subuser_access: bool,
    pub subuser_access: Vec<TeammateSubuser>,
    #[serde(rename = "_metadata")]
    pub metadata: SubuserAccessMetadata,
}
