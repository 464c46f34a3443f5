//! Teammate display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{format_unix_seconds, join_or_dash, truncate_string};
use crate::client::models::{PendingInvitation, TeammateScope};

/// Longest scope list shown in a table cell
const SCOPE_CELL_WIDTH: usize = 60;

/// Teammate holding a scope, as listed by `scope members`.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct MemberDisplay {
    #[tabled(rename = "USERNAME")]
    pub username: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ADMIN")]
    pub is_admin: bool,

    #[tabled(rename = "SCOPES")]
    pub scope_count: usize,
}

impl From<&TeammateScope> for MemberDisplay {
    fn from(member: &TeammateScope) -> Self {
        Self {
            username: member.teammate.username.clone(),
            email: member.teammate.email.clone(),
            name: member.teammate.display_name(),
            is_admin: member.teammate.is_admin,
            scope_count: member.scopes.iter().filter(|s| !s.is_empty()).count(),
        }
    }
}

/// Pending teammate invitation.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PendingDisplay {
    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "ADMIN")]
    pub is_admin: bool,

    #[tabled(rename = "SCOPES")]
    pub scopes: String,

    #[tabled(rename = "EXPIRES")]
    pub expires: String,

    #[tabled(rename = "TOKEN")]
    pub token: String,
}

impl From<PendingInvitation> for PendingDisplay {
    fn from(invite: PendingInvitation) -> Self {
        Self {
            email: invite.email,
            is_admin: invite.is_admin,
            scopes: truncate_string(&join_or_dash(&invite.scopes), SCOPE_CELL_WIDTH),
            expires: format_unix_seconds(invite.expiration_date),
            token: invite.token,
        }
    }
}
