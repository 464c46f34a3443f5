//! Scope provisioning commands

use colored::Colorize;
use log::warn;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::models::{GrantDisplay, MemberDisplay};
use crate::output::{Formattable, print_json};
use crate::sync::catalog;
use crate::sync::{GrantOutcome, RevokeOutcome};

fn warn_if_unknown(scope: &str) {
    if !catalog::is_known(scope) {
        warn!("Scope {:?} is not in the SendGrid scope catalog", scope);
    }
}

/// Grant a scope to a teammate
pub async fn grant(opts: &GlobalOptions, username: &str, scope: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    warn_if_unknown(scope);

    let outcome = ctx.connector.grant_scope(username, scope).await?;

    match (ctx.format, outcome) {
        (OutputFormat::Json, GrantOutcome::Granted(grants)) => {
            let rows: Vec<GrantDisplay> = grants.iter().map(GrantDisplay::from).collect();
            print_json(&serde_json::json!({ "granted": true, "grants": rows }))?;
        }
        (OutputFormat::Json, GrantOutcome::AlreadyGranted) => {
            print_json(&serde_json::json!({ "granted": false, "already_granted": true }))?;
        }
        (_, GrantOutcome::Granted(_)) => {
            eprintln!(
                "{} Granted {} to {}",
                "✓".green(),
                scope.bold(),
                username.bold()
            );
        }
        (_, GrantOutcome::AlreadyGranted) => {
            eprintln!(
                "{} {} already holds {}, nothing to do",
                "○".dimmed(),
                username,
                scope
            );
        }
    }

    Ok(())
}

/// Revoke a scope from a teammate
pub async fn revoke(opts: &GlobalOptions, username: &str, scope: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let outcome = ctx.connector.revoke_scope(username, scope).await?;

    match ctx.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "revoked": outcome == RevokeOutcome::Revoked,
            "already_revoked": outcome == RevokeOutcome::AlreadyRevoked,
        }))?,
        _ => match outcome {
            RevokeOutcome::Revoked => eprintln!(
                "{} Revoked {} from {}",
                "✓".green(),
                scope.bold(),
                username.bold()
            ),
            RevokeOutcome::AlreadyRevoked => eprintln!(
                "{} {} does not hold {}, nothing to do",
                "○".dimmed(),
                username,
                scope
            ),
        },
    }

    Ok(())
}

/// List teammates holding a scope
pub async fn members(opts: &GlobalOptions, scope: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    warn_if_unknown(scope);

    let members = ctx.connector.scope_members(scope).await?;
    let rows: Vec<MemberDisplay> = members.iter().map(|m| MemberDisplay::from(m.as_ref())).collect();

    rows.print(ctx.format)
}
