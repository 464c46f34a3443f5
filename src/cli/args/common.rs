//! Common CLI types shared across commands

use crate::sync::ResourceType;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-optimized rich formatting
    #[default]
    Pretty,
    /// Table format - machine-parseable, one row per entry
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
}

/// Resource kinds accepted by `list`
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ListKind {
    Teammates,
    Subusers,
    Scopes,
}

impl From<ListKind> for ResourceType {
    fn from(kind: ListKind) -> Self {
        match kind {
            ListKind::Teammates => ResourceType::Teammate,
            ListKind::Subusers => ResourceType::Subuser,
            ListKind::Scopes => ResourceType::Scope,
        }
    }
}
