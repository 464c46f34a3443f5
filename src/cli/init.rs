//! Init command implementation

use std::sync::Arc;

use colored::Colorize;
use dialoguer::{Confirm, Password, Select, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::client::SendGridClient;
use crate::config::{Config, Region};
use crate::error::Result;
use crate::sync::{Connector, ConnectorOptions};

/// Run the init command
///
/// Prompts for the API key, region and subuser suppression, verifies the key
/// with one teammate page, then saves the config file. An `--api-host`
/// override is used for verification and kept in the saved file.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let theme = ColorfulTheme::default();

    println!("{}", "Welcome to sendgrid-connector!".bold().green());
    println!("Let's set up your SendGrid configuration.\n");

    let mut config = Config::load_or_default_at(opts.config_ref())?;

    let api_key: String = Password::with_theme(&theme)
        .with_prompt("Enter your SendGrid API key")
        .interact()?;

    let regions = [Region::Global, Region::Eu];
    let labels = ["global (api.sendgrid.com)", "eu (api.eu.sendgrid.com)"];
    let current = regions
        .iter()
        .position(|r| *r == config.region())
        .unwrap_or(0);
    let region = Select::with_theme(&theme)
        .with_prompt("Select your SendGrid region")
        .items(&labels)
        .default(current)
        .interact()?;

    let ignore_subusers = Confirm::with_theme(&theme)
        .with_prompt("Skip subuser sync? (subusers require an upgraded SendGrid plan)")
        .default(config.ignore_subusers)
        .interact()?;

    config.api_key = Some(api_key);
    config.region = Some(regions[region].as_str().to_string());
    config.ignore_subusers = ignore_subusers;
    if let Some(host) = opts.api_host_ref() {
        config.api_host = Some(host.to_string());
    }
    let base_url = config.validate()?;

    println!("\n{}", "Verifying API key...".cyan());
    let client = SendGridClient::new(base_url.as_str(), config.require_api_key()?)?;
    Connector::new(Arc::new(client), ConnectorOptions::default())
        .validate()
        .await?;
    println!("{}", "✓ API key accepted".green());

    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );
    println!("  Region: {}", regions[region].as_str().bold());
    if ignore_subusers {
        println!("  Subuser sync: {}", "disabled".yellow());
    }

    println!("\n{}", "You're all set! Try running:".bold());
    println!(
        "  {} - Show configuration status",
        "sendgrid-connector status".cyan()
    );
    println!(
        "  {} - Run a full sync pass",
        "sendgrid-connector sync".cyan()
    );

    Ok(())
}
