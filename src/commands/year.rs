//! `admit year` commands - list and create admission years

use admit_core::api::{with_timeout, AdmissionsApi};
use admit_core::error::Result;
use admit_core::year::YearField;
use admit_core::year_form::{SubmitOutcome, YearFormController};

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

/// Field values for `admit year create`, as typed
pub struct CreateFields<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub start: &'a str,
    pub end: &'a str,
    pub description: Option<&'a str>,
}

pub async fn list(ctx: &CommandContext<'_>) -> Result<()> {
    let api = ctx.api()?;
    let years = with_timeout("list years", ctx.config.timeout(), api.list_years()).await?;

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&years)?);
        }
        OutputFormat::Human => {
            if years.is_empty() {
                if !ctx.cli.quiet {
                    println!("No admission years found");
                }
                return Ok(());
            }
            for year in &years {
                let range = match (&year.start_date, &year.end_date) {
                    (Some(start), Some(end)) => format!("  {} .. {}", start, end),
                    _ => String::new(),
                };
                println!("{}  {}{}", year.year_id, year.year_name, range);
            }
        }
    }

    Ok(())
}

pub async fn create(ctx: &CommandContext<'_>, fields: CreateFields<'_>) -> Result<()> {
    let mut form = YearFormController::new(ctx.config.timeout());
    form.open();
    form.edit_field(YearField::YearId, fields.id)?;
    form.edit_field(YearField::Name, fields.name)?;
    form.edit_field(YearField::StartDate, fields.start)?;
    form.edit_field(YearField::EndDate, fields.end)?;
    if let Some(description) = fields.description {
        form.edit_field(YearField::Description, description)?;
    }

    // validation runs before the API client is even built
    let ticket = form.begin_submit()?;
    let api = ctx.api()?;
    let result = with_timeout(
        "create year",
        ctx.config.timeout(),
        api.create_year(ticket.metadata()),
    )
    .await;

    match form.finish_submit(ticket, result)? {
        SubmitOutcome::Created { year_id } => match ctx.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::json!({ "created": year_id }));
            }
            OutputFormat::Human => {
                if !ctx.cli.quiet {
                    println!("Created admission year {}", year_id);
                }
            }
        },
        SubmitOutcome::Stale => {}
    }

    Ok(())
}
