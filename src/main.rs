//! sendgrid-connector - sync SendGrid teammates, subusers and scopes into an
//! identity-governance graph

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod sync;

use cli::args::GlobalOptions;
use cli::{Cli, Commands, ScopeCommands, SubuserCommands, TeammateCommands};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        if matches!(&err, error::Error::Api(api) if api.is_retryable()) {
            eprintln!("  → The failure looks transient; retrying may succeed");
        }
        std::process::exit(1);
    }
}

/// `warn` by default, `debug` with `--debug`; `RUST_LOG` overrides both.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Validate => cli::sync::validate(&opts).await,
        Commands::Sync { timeout } => cli::sync::run(&opts, timeout).await,
        Commands::List { kind, token } => cli::list::run(&opts, kind, &token).await,
        Commands::Scope(scope_cmd) => match scope_cmd {
            ScopeCommands::Grant { username, scope } => {
                cli::scope::grant(&opts, &username, &scope).await
            }
            ScopeCommands::Revoke { username, scope } => {
                cli::scope::revoke(&opts, &username, &scope).await
            }
            ScopeCommands::Members { scope } => cli::scope::members(&opts, &scope).await,
        },
        Commands::Teammate(teammate_cmd) => match teammate_cmd {
            TeammateCommands::Invite {
                email,
                scopes,
                admin,
            } => cli::teammate::invite(&opts, &email, &scopes, admin).await,
            TeammateCommands::Delete { username, yes } => {
                cli::teammate::delete(&opts, &username, yes).await
            }
            TeammateCommands::Pending { token } => cli::teammate::pending(&opts, &token).await,
        },
        Commands::Subuser(subuser_cmd) => match subuser_cmd {
            SubuserCommands::Create {
                username,
                email,
                password,
                ips,
                region,
            } => {
                cli::subuser::create(
                    &opts,
                    cli::subuser::CreateArgs {
                        username,
                        email,
                        password,
                        ips,
                        region,
                    },
                )
                .await
            }
            SubuserCommands::Delete { username, yes } => {
                cli::subuser::delete(&opts, &username, yes).await
            }
            SubuserCommands::Disable { username } => {
                cli::subuser::set_disabled(&opts, &username, true).await
            }
            SubuserCommands::Enable { username } => {
                cli::subuser::set_disabled(&opts, &username, false).await
            }
        },
    }
}
