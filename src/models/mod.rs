//! Display models for CLI output
//!
//! Converts sync resources and API records into CLI-friendly display rows.

pub mod display;

pub use display::{
    GrantDisplay, MemberDisplay, PendingDisplay, ResourceDisplay, SyncSummaryDisplay,
};
