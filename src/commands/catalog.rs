//! `admit catalog` command - browse one category's catalog

use admit_core::api::{with_timeout, AdmissionsApi};
use admit_core::category::Category;
use admit_core::error::Result;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

pub async fn execute(ctx: &CommandContext<'_>, category: Category, query: &str) -> Result<()> {
    let api = ctx.api()?;
    let catalog = with_timeout(
        "load catalog",
        ctx.config.timeout(),
        api.fetch_catalog(category),
    )
    .await?;

    let items: Vec<_> = catalog.visible(query).collect();

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        OutputFormat::Human => {
            if items.is_empty() {
                if !ctx.cli.quiet {
                    println!("No {} found", category.descriptor().label.to_lowercase());
                }
                return Ok(());
            }
            for item in &items {
                println!("{}  {}", item.id, item.display_name);
            }
            if !ctx.cli.quiet {
                println!();
                println!("{} of {} shown", items.len(), catalog.len());
            }
        }
    }

    Ok(())
}
