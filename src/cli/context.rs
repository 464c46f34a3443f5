//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, validation, and client initialization.

use std::sync::Arc;

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::SendGridClient;
use crate::config::Config;
use crate::error::Result;
use crate::sync::{Connector, ConnectorOptions};

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded configuration with CLI/env overrides applied
    pub config: Config,
    /// API client (Arc-wrapped, shared with the connector drivers)
    pub client: Arc<SendGridClient>,
    /// Drivers wired around `client`
    pub connector: Connector<SendGridClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Loads the config file (a missing file is treated as empty so env-only
    /// setups work), applies overrides, validates the API key and base URL,
    /// then builds the client and connector.
    ///
    /// # Errors
    /// Returns error if the config cannot be parsed, the API key is missing,
    /// or the base URL is invalid.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = resolve_config(opts)?;
        let base_url = config.validate()?;
        debug!("Using SendGrid API at {}", base_url);

        let client = Arc::new(SendGridClient::new(
            base_url.as_str(),
            config.require_api_key()?,
        )?);
        let connector = Connector::new(
            client.clone(),
            ConnectorOptions {
                ignore_subusers: config.ignore_subusers,
                detail_concurrency: config.detail_concurrency(),
            },
        );

        Ok(Self {
            config,
            client,
            connector,
            format: opts.format,
        })
    }
}

/// Load the config file and fold CLI/env overrides over it, without validating.
pub fn resolve_config(opts: &GlobalOptions) -> Result<Config> {
    let mut config = Config::load_or_default_at(opts.config_ref())?;
    opts.apply_to(&mut config);
    Ok(config)
}
