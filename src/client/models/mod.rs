//! SendGrid API data models
//!
//! Wire types for the teammate and subuser endpoints, organized by resource family.

mod subuser;
mod teammate;

pub use subuser::{
    NextParams, Subuser, SubuserAccessMetadata, SubuserCreate, TeammateSubuser,
    TeammateSubuserAccess, WebsiteAccessRequest,
};
pub use teammate::{
    InviteTeammateRequest, ListBody, PendingInvitation, ResultEnvelope, Teammate, TeammateScope,
    UpdateTeammatePermissions,
};
