//! Teammate management commands

use colored::Colorize;
use dialoguer::Confirm;

use crate::cli::args::GlobalOptions;
use crate::cli::list::print_next_token_hint;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::TeammateApi;
use crate::client::models::InviteTeammateRequest;
use crate::error::Result;
use crate::models::PendingDisplay;
use crate::output::json::format_page_json;
use crate::output::{Formattable, print_json};

/// Invite a teammate by email
pub async fn invite(opts: &GlobalOptions, email: &str, scopes: &[String], admin: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let request = InviteTeammateRequest {
        email: email.to_string(),
        scopes: scopes.to_vec(),
        is_admin: admin,
    };
    ctx.client.invite_teammate(&request).await?;

    match ctx.format {
        OutputFormat::Json => print_json(&request)?,
        _ => {
            eprintln!("{} Invitation sent to {}", "✓".green(), email.bold());
            eprintln!("→ Track it: sendgrid-connector teammate pending");
        }
    }

    Ok(())
}

/// Delete a teammate, confirming interactively in pretty mode
pub async fn delete(opts: &GlobalOptions, username: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if !yes && ctx.format == OutputFormat::Pretty {
        let confirm = Confirm::new()
            .with_prompt(format!("Delete teammate {}? This cannot be undone.", username))
            .default(false)
            .interact()?;

        if !confirm {
            eprintln!("Cancelled.");
            return Ok(());
        }
    }

    ctx.client.delete_teammate(username).await?;

    match ctx.format {
        OutputFormat::Json => {
            print_json(&serde_json::json!({ "deleted": true, "username": username }))?
        }
        _ => eprintln!("{} Teammate {} deleted", "✓".green(), username),
    }

    Ok(())
}

/// List pending invitations, one page at a time
pub async fn pending(opts: &GlobalOptions, token: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let page = ctx.client.list_pending_invitations(token).await?;
    let rows: Vec<PendingDisplay> = page.items.into_iter().map(PendingDisplay::from).collect();

    match ctx.format {
        OutputFormat::Json => println!("{}", format_page_json(&rows, &page.next_token)?),
        _ => {
            rows.print(ctx.format)?;
            print_next_token_hint(&page.next_token, "teammate pending");
        }
    }

    Ok(())
}
