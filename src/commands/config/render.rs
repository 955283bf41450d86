//! Rendering of the configuration modal state

use admit_core::category::Category;
use admit_core::controller::ConfigController;
use admit_core::error::Result;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

pub fn output(ctx: &CommandContext<'_>, controller: &ConfigController) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&controller.view())?);
        }
        OutputFormat::Human => output_human(ctx, controller),
    }
    Ok(())
}

fn output_human(ctx: &CommandContext<'_>, controller: &ConfigController) {
    let summary = controller.summary();
    let selection = controller.selection();

    if let Some(year) = controller.year_id() {
        println!("Admission year {}", year);
    }

    for category in Category::ALL {
        let descriptor = category.descriptor();
        let counts = summary.get(category);
        let query = controller.search_state().query(category);

        let mut header = format!(
            "{}: {} selected of {}",
            descriptor.label, counts.selected, counts.total_in_catalog
        );
        if !query.is_empty() {
            header.push_str(&format!(
                " (search \"{}\": {} visible)",
                query,
                counts.visible.unwrap_or(0)
            ));
        }
        println!();
        println!("{}", header);

        if ctx.cli.quiet {
            continue;
        }

        for item in controller.visible(category) {
            let mark = if selection.contains(category, &item.id) {
                "x"
            } else {
                " "
            };
            println!("  [{}] {}  {}", mark, item.id, item.display_name);
        }

        if query.is_empty() {
            let catalog = controller.catalog(category);
            for id in selection.ids(category) {
                if catalog.get(id).is_none() {
                    println!("  [x] {}  (not in catalog)", id);
                }
            }
        }
    }

    println!();
    println!("Total selected: {}", summary.total_selected);
}
