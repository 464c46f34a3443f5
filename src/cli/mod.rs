//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod context;
pub mod init;
pub mod list;
pub mod scope;
pub mod status;
pub mod subuser;
pub mod sync;
pub mod teammate;

pub use args::{ListKind, OutputFormat};
pub use context::CommandContext;

/// sendgrid-connector - sync SendGrid teammates, subusers and scopes into an
/// identity-governance graph
#[derive(Parser, Debug)]
#[command(name = "sendgrid-connector")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "SENDGRID_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "SENDGRID_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "SENDGRID_DEBUG", hide_env = true)]
    pub debug: bool,

    /// SendGrid API key
    #[arg(
        long,
        global = true,
        env = "SENDGRID_API_KEY",
        hide_env_values = true
    )]
    pub api_key: Option<String>,

    /// SendGrid region (global, eu)
    #[arg(long, global = true, env = "SENDGRID_REGION", hide_env = true)]
    pub region: Option<String>,

    /// Skip syncing subusers (`--ignore-subusers=false` re-enables)
    #[arg(
        long,
        global = true,
        env = "SENDGRID_IGNORE_SUBUSERS",
        hide_env = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub ignore_subusers: Option<bool>,

    /// Custom API host (development/testing)
    #[arg(long, global = true, env = "SENDGRID_API_HOST", hide = true)]
    pub api_host: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize connector configuration
    Init,

    /// Show configuration status
    Status,

    /// Check the configured credentials against the SendGrid API
    Validate,

    /// Run a full sync pass over teammates, subusers and scopes
    #[command(after_help = "\
Examples:
  sendgrid-connector sync
  sendgrid-connector sync --timeout 300 --format json > snapshot.json")]
    Sync {
        /// Abort the pass after this many seconds
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },

    /// List one page of resources
    #[command(after_help = "\
Examples:
  sendgrid-connector list teammates
  sendgrid-connector list subusers --token 500")]
    List {
        /// Resource kind to list
        #[arg(value_enum)]
        kind: ListKind,

        /// Continuation token from a previous page
        #[arg(long, default_value = "")]
        token: String,
    },

    /// Grant, revoke and inspect teammate scopes
    #[command(subcommand)]
    Scope(ScopeCommands),

    /// Manage teammates
    #[command(subcommand)]
    Teammate(TeammateCommands),

    /// Manage subusers
    #[command(subcommand)]
    Subuser(SubuserCommands),
}

/// Scope provisioning subcommands
#[derive(Subcommand, Debug)]
pub enum ScopeCommands {
    /// Grant a scope to a teammate
    #[command(after_help = "\
Examples:
  sendgrid-connector scope grant alice mail.send")]
    Grant {
        /// Teammate username
        username: String,

        /// Scope name
        scope: String,
    },

    /// Revoke a scope from a teammate
    Revoke {
        /// Teammate username
        username: String,

        /// Scope name
        scope: String,
    },

    /// List teammates holding a scope
    Members {
        /// Scope name
        scope: String,
    },
}

/// Teammate management subcommands
#[derive(Subcommand, Debug)]
pub enum TeammateCommands {
    /// Invite a new teammate by email
    #[command(after_help = "\
Examples:
  sendgrid-connector teammate invite bob@example.com --scope mail.send --scope stats.read
  sendgrid-connector teammate invite ops@example.com --admin")]
    Invite {
        /// Email address to invite
        email: String,

        /// Scope to assign (repeatable)
        #[arg(long = "scope", short = 's', value_name = "SCOPE")]
        scopes: Vec<String>,

        /// Invite as an administrator
        #[arg(long)]
        admin: bool,
    },

    /// Delete a teammate
    Delete {
        /// Teammate username
        username: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List pending invitations
    Pending {
        /// Continuation token from a previous page
        #[arg(long, default_value = "")]
        token: String,
    },
}

/// Subuser management subcommands
#[derive(Subcommand, Debug)]
pub enum SubuserCommands {
    /// Create a subuser
    Create {
        /// Subuser username
        #[arg(long)]
        username: String,

        /// Contact email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long, env = "SENDGRID_SUBUSER_PASSWORD", hide_env_values = true)]
        password: String,

        /// Sending IP to assign (repeatable)
        #[arg(long = "ip", value_name = "IP")]
        ips: Vec<String>,

        /// Data-residency region for the subuser (global, eu)
        #[arg(long = "data-region", value_name = "REGION")]
        region: Option<String>,
    },

    /// Delete a subuser
    Delete {
        /// Subuser username
        username: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Disable website access for a subuser
    Disable {
        /// Subuser username
        username: String,
    },

    /// Enable website access for a subuser
    Enable {
        /// Subuser username
        username: String,
    },
}
