//! Subuser API trait

use async_trait::async_trait;

use crate::client::models::{Subuser, SubuserCreate};
use crate::client::pagination::Page;
use crate::error::Result;

/// Subuser account operations against the SendGrid API.
#[async_trait]
pub trait SubuserApi: Send + Sync {
    /// List subusers (offset cursor).
    async fn list_subusers(&self, token: &str) -> Result<Page<Subuser>>;

    /// Create a subuser.
    async fn create_subuser(&self, request: &SubuserCreate) -> Result<()>;

    /// Delete a subuser.
    async fn delete_subuser(&self, username: &str) -> Result<()>;

    /// Enable or disable website access for a subuser.
    async fn set_subuser_disabled(&self, username: &str, disabled: bool) -> Result<()>;
}
