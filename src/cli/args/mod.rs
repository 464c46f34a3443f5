//! Shared CLI argument types

mod common;
mod global;

pub use common::{ListKind, OutputFormat};
pub use global::GlobalOptions;
