//! `admit config show` command

use admit_core::controller::ConfigController;
use admit_core::error::Result;

use super::render;
use crate::cli::parse::ScopedQuery;
use crate::commands::dispatch::CommandContext;

pub async fn execute(ctx: &CommandContext<'_>, year: &str, searches: &[ScopedQuery]) -> Result<()> {
    let api = ctx.api()?;
    let mut controller = ConfigController::new(ctx.config.timeout());
    controller.open(&api, year).await?;

    for search in searches {
        controller.search(search.category, &search.query)?;
    }

    render::output(ctx, &controller)?;
    controller.cancel();
    Ok(())
}
