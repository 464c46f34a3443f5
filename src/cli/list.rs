//! List command implementation

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, ListKind, OutputFormat};
use crate::error::Result;
use crate::models::ResourceDisplay;
use crate::output::Formattable;
use crate::output::json::format_page_json;
use crate::sync::ResourceType;

/// Print one page of one resource type
pub async fn run(opts: &GlobalOptions, kind: ListKind, token: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let resource_type = ResourceType::from(kind);

    debug!("Listing {} resources from token {:?}", resource_type, token);
    let page = ctx.connector.list_page(resource_type, token).await?;
    debug!("Fetched {} {} resources", page.items.len(), resource_type);

    let rows: Vec<ResourceDisplay> = page.items.iter().map(ResourceDisplay::from).collect();

    match ctx.format {
        OutputFormat::Json => println!("{}", format_page_json(&rows, &page.next_token)?),
        _ => {
            rows.print(ctx.format)?;
            print_next_token_hint(&page.next_token, &format!("list {}", kind_arg(kind)));
        }
    }

    Ok(())
}

fn kind_arg(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Teammates => "teammates",
        ListKind::Subusers => "subusers",
        ListKind::Scopes => "scopes",
    }
}

/// Tell the user how to fetch the next page, if there is one
pub(crate) fn print_next_token_hint(next_token: &str, command: &str) {
    if !next_token.is_empty() {
        eprintln!(
            "→ More results: {}",
            format!("sendgrid-connector {} --token {}", command, next_token).cyan()
        );
    }
}
