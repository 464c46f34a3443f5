//! SendGrid API client
//!
//! Provides the access layer over the SendGrid administrative API:
//! - [`api`] - capability traits implemented by real and test clients
//! - [`sendgrid`] - production HTTP implementation
//! - [`pagination`] - continuation token codec shared by all list operations
//! - [`parallel`] - bounded, order-preserving fan-out for detail fetches

pub mod api;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod parallel;
pub mod sendgrid;

pub use api::{SendGridApi, SubuserApi, TeammateApi};
#[cfg(test)]
pub use mock::MockSendGridClient;
pub use pagination::{Cursor, CursorStyle, PAGE_SIZE, Page};
pub use parallel::fetch_ordered;
pub use sendgrid::SendGridClient;
