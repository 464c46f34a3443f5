//! Subuser management commands

use colored::Colorize;
use dialoguer::Confirm;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::SubuserApi;
use crate::client::models::SubuserCreate;
use crate::config::Region;
use crate::error::Result;
use crate::output::print_json;

/// Arguments for `subuser create`
#[derive(Debug, Clone)]
pub struct CreateArgs {
    pub username: String,
    pub email: String,
    pub password: String,
    pub ips: Vec<String>,
    pub region: Option<String>,
}

impl CreateArgs {
    fn into_request(self) -> SubuserCreate {
        let region = self
            .region
            .as_deref()
            .map(|r| Region::parse_lenient(r).as_str().to_string());

        SubuserCreate {
            username: self.username,
            email: self.email,
            password: self.password,
            ips: self.ips,
            include_region: region.is_some(),
            region,
        }
    }
}

/// Create a subuser
pub async fn create(opts: &GlobalOptions, args: CreateArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let username = args.username.clone();
    ctx.client.create_subuser(&args.into_request()).await?;

    match ctx.format {
        OutputFormat::Json => {
            print_json(&serde_json::json!({ "created": true, "username": username }))?
        }
        _ => eprintln!("{} Subuser {} created", "✓".green(), username.bold()),
    }

    Ok(())
}

/// Delete a subuser, confirming interactively in pretty mode
pub async fn delete(opts: &GlobalOptions, username: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if !yes && ctx.format == OutputFormat::Pretty {
        let confirm = Confirm::new()
            .with_prompt(format!("Delete subuser {}? This cannot be undone.", username))
            .default(false)
            .interact()?;

        if !confirm {
            eprintln!("Cancelled.");
            return Ok(());
        }
    }

    ctx.client.delete_subuser(username).await?;

    match ctx.format {
        OutputFormat::Json => {
            print_json(&serde_json::json!({ "deleted": true, "username": username }))?
        }
        _ => eprintln!("{} Subuser {} deleted", "✓".green(), username),
    }

    Ok(())
}

/// Enable or disable website access for a subuser
pub async fn set_disabled(opts: &GlobalOptions, username: &str, disabled: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    ctx.client.set_subuser_disabled(username, disabled).await?;

    let state = if disabled { "disabled" } else { "enabled" };
    match ctx.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "username": username,
            "disabled": disabled,
        }))?,
        _ => eprintln!("{} Subuser {} {}", "✓".green(), username, state),
    }

    Ok(())
}
