//! Command dispatch logic for admit

use std::time::Instant;

use crate::cli::{Cli, Commands, ConfigCommands, SettingsCommands, YearCommands};
use crate::commands::{catalog, config, settings, year};
use admit_core::error::{AdmitError, Result};
use tracing::debug;

mod command;

pub use command::CommandContext;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start)?;

    debug!(elapsed = ?start.elapsed(), api_url = %ctx.config.api_url, "resolve_config");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| AdmitError::operation("start async runtime", e))?;

    runtime.block_on(execute(&ctx))
}

async fn execute(ctx: &CommandContext<'_>) -> Result<()> {
    let Some(command) = &ctx.cli.command else {
        println!("admit {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Admission year configuration client.");
        println!();
        println!("Run `admit --help` for usage information.");
        return Ok(());
    };

    match command {
        Commands::Catalog { category, search } => {
            catalog::execute(ctx, *category, search.as_deref().unwrap_or_default()).await
        }
        Commands::Config(ConfigCommands::Show { year, search }) => {
            config::show::execute(ctx, year, search).await
        }
        Commands::Config(ConfigCommands::Edit(args)) => config::edit::execute(ctx, args).await,
        Commands::Year(YearCommands::List) => year::list(ctx).await,
        Commands::Year(YearCommands::Create {
            id,
            name,
            start,
            end,
            description,
        }) => {
            let fields = year::CreateFields {
                id,
                name,
                start,
                end,
                description: description.as_deref(),
            };
            year::create(ctx, fields).await
        }
        Commands::Settings(SettingsCommands::Show) => settings::show(ctx),
        Commands::Settings(SettingsCommands::Set { key, value }) => settings::set(ctx, key, value),
        Commands::Settings(SettingsCommands::Logout) => settings::logout(ctx),
    }
}
