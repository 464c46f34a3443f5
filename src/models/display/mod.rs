//! Display model implementations for table and JSON output
//!
//! Display models transform sync resources and API records into CLI-friendly
//! rows with appropriate column names and serialization.

mod common;
mod grant;
mod resource;
mod teammate;

pub use grant::{GrantDisplay, SyncSummaryDisplay};
pub use resource::ResourceDisplay;
pub use teammate::{MemberDisplay, PendingDisplay};
