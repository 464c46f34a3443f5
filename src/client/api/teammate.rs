//! Teammate API trait

use async_trait::async_trait;

use crate::client::models::{
    InviteTeammateRequest, PendingInvitation, Teammate, TeammateScope, TeammateSubuser,
    UpdateTeammatePermissions,
};
use crate::client::pagination::Page;
use crate::error::Result;

/// Teammate operations against the SendGrid API.
///
/// List operations take the continuation token issued by the previous call
/// of the same operation (empty for the first page) and never accept tokens
/// from another operation.
#[async_trait]
pub trait TeammateApi: Send + Sync {
    // ========================================================================
    // Read Operations
    // ========================================================================

    /// List teammates (offset cursor). The list endpoint carries no scopes.
    async fn list_teammates(&self, token: &str) -> Result<Page<Teammate>>;

    /// Fetch one teammate with its authoritative scope list.
    async fn get_teammate(&self, username: &str) -> Result<TeammateScope>;

    /// List invitations that have not been accepted yet (offset cursor).
    async fn list_pending_invitations(&self, token: &str) -> Result<Page<PendingInvitation>>;

    /// List the subusers a teammate can access (after-id cursor).
    async fn list_teammate_subuser_access(
        &self,
        username: &str,
        token: &str,
    ) -> Result<Page<TeammateSubuser>>;

    // ========================================================================
    // Write Operations
    // ========================================================================

    /// Invite a new teammate by email.
    async fn invite_teammate(&self, request: &InviteTeammateRequest) -> Result<()>;

    /// Delete a teammate.
    async fn delete_teammate(&self, username: &str) -> Result<()>;

    /// Replace a teammate's scope set and admin flag.
    async fn update_teammate_permissions(
        &self,
        username: &str,
        request: &UpdateTeammatePermissions,
    ) -> Result<()>;
}
