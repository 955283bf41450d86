//! `admit config edit` command
//!
//! Opens the year, applies the requested edits in a fixed order (clear,
//! toggle-all, select, deselect) and saves the result as a wholesale
//! replacement.

use admit_core::controller::{ConfigController, SaveOutcome};
use admit_core::error::{AdmitError, Result};
use tracing::debug;

use super::render;
use crate::cli::{EditArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;

pub async fn execute(ctx: &CommandContext<'_>, args: &EditArgs) -> Result<()> {
    let api = ctx.api()?;
    let mut controller = ConfigController::new(ctx.config.timeout());
    controller.open(&api, &args.year).await?;

    apply_edits(&mut controller, args)?;

    if args.dry_run {
        render::output(ctx, &controller)?;
        controller.cancel();
        return Ok(());
    }

    let summary = controller.summary();
    match controller.save(&api).await? {
        SaveOutcome::Saved { year_id } => {
            match ctx.cli.format {
                OutputFormat::Json => {
                    let output = serde_json::json!({
                        "saved": year_id,
                        "summary": summary,
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Human => {
                    if !ctx.cli.quiet {
                        println!(
                            "Saved admission year {} ({} selected)",
                            year_id, summary.total_selected
                        );
                    }
                }
            }
            Ok(())
        }
        SaveOutcome::Rejected | SaveOutcome::Stale => Err(AdmitError::SaveFailed {
            reason: "save was not applied".to_string(),
        }),
    }
}

fn apply_edits(controller: &mut ConfigController, args: &EditArgs) -> Result<()> {
    for category in &args.clear {
        controller.clear(*category)?;
    }

    for scoped in &args.toggle_all {
        controller.search(scoped.category, &scoped.query)?;
        let state = controller.toggle_all(scoped.category)?;
        debug!(category = %scoped.category, query = %scoped.query, ?state, "toggle_all");
        controller.search(scoped.category, "")?;
    }

    for item in &args.select {
        if controller.catalog(item.category).get(&item.id).is_none() {
            return Err(AdmitError::invalid_value(
                &format!("{} id", item.category),
                &item.id,
            ));
        }
        controller.toggle(item.category, &item.id, true)?;
    }

    // deselecting ids missing from the catalog is how stale selections get removed
    for item in &args.deselect {
        controller.toggle(item.category, &item.id, false)?;
    }

    Ok(())
}
