//! API trait definitions split by resource family
//!
//! - [`TeammateApi`] - teammates, pending invitations and per-teammate subuser access
//! - [`SubuserApi`] - subuser accounts
//!
//! The [`SendGridApi`] super-trait combines both and is what the sync drivers hold.

mod subuser;
mod teammate;

pub use subuser::SubuserApi;
pub use teammate::TeammateApi;

/// Full SendGrid capability used by the connector.
pub trait SendGridApi: TeammateApi + SubuserApi {}

impl<T: TeammateApi + SubuserApi> SendGridApi for T {}
