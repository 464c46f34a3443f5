//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::context::resolve_config;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
///
/// Offline: reports what the next command would use without calling SendGrid.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "sendgrid-connector Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not found)".dimmed()
        );
    }
    println!();

    let config = resolve_config(opts)?;

    if config.require_api_key().is_ok() {
        println!("{} API key configured", "✓".green());
    } else {
        println!("{} API key not configured", "✗".red());
        println!("  → Run 'sendgrid-connector init' or set SENDGRID_API_KEY");
    }

    let region = config.region();
    println!("{} Region: {}", "○".dimmed(), region.as_str());

    match config.base_url_for(region) {
        Ok(url) => println!("{} API endpoint: {}", "○".dimmed(), url.as_str().cyan()),
        Err(err) => println!("{} {}", "✗".red(), err),
    }

    if config.ignore_subusers {
        println!("{} Subuser sync disabled", "⚠".yellow());
    } else {
        println!("{} Subuser sync enabled", "✓".green());
    }

    println!(
        "{} Teammate detail concurrency: {}",
        "○".dimmed(),
        config.detail_concurrency()
    );

    println!();

    Ok(())
}
