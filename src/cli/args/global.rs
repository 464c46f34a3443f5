//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; [`GlobalOptions::apply_to`] folds it over the
/// loaded config file.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.sendgrid-connector/config.yaml)
    pub config: Option<String>,

    /// SendGrid API key override
    pub api_key: Option<String>,

    /// Region override (global, eu)
    pub region: Option<String>,

    /// Subuser sync suppression override; `None` defers to the config file
    pub ignore_subusers: Option<bool>,

    /// Custom API host for development/testing
    pub api_host: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_key: cli.api_key.clone(),
            region: cli.region.clone(),
            ignore_subusers: cli.ignore_subusers,
            api_host: cli.api_host.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get API host override as `Option<&str>`.
    pub fn api_host_ref(&self) -> Option<&str> {
        self.api_host.as_deref()
    }

    /// Layer the CLI/env values over a loaded config.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(key) = &self.api_key {
            config.api_key = Some(key.clone());
        }
        if let Some(region) = &self.region {
            config.region = Some(region.clone());
        }
        if let Some(host) = &self.api_host {
            config.api_host = Some(host.clone());
        }
        if let Some(ignore) = self.ignore_subusers {
            config.ignore_subusers = ignore;
        }
    }
}
