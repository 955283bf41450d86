//! `admit settings` commands

use admit_core::config::ClientConfig;
use admit_core::error::{AdmitError, Result};

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

pub fn show(ctx: &CommandContext<'_>) -> Result<()> {
    let config = &ctx.config;
    let token = if config.token.is_some() { "set" } else { "not set" };

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "api_url": config.api_url,
                "timeout_seconds": config.timeout_seconds,
                "token": config.token.is_some(),
                "path": ClientConfig::config_path()?,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("api-url: {}", config.api_url);
            println!("timeout: {}s", config.timeout_seconds);
            println!("token: {}", token);
        }
    }
    Ok(())
}

pub fn set(ctx: &CommandContext<'_>, key: &str, value: &str) -> Result<()> {
    // start from the file alone so env and flag overrides are not persisted
    let mut config = ClientConfig::load_from(&ClientConfig::config_path()?)?;

    match key {
        "api-url" | "api_url" => config.api_url = value.to_string(),
        "timeout" => {
            let seconds = value
                .parse::<u64>()
                .map_err(|_| AdmitError::invalid_value("timeout", value))?;
            config.set_timeout_seconds(seconds);
        }
        "token" => config.token = Some(value.to_string()),
        other => {
            return Err(AdmitError::UsageError(format!(
                "unknown setting: {} (expected: api-url, timeout, or token)",
                other
            )))
        }
    }

    let path = config.save()?;
    if !ctx.cli.quiet {
        println!("Updated {} in {}", key, path.display());
    }
    Ok(())
}

pub fn logout(ctx: &CommandContext<'_>) -> Result<()> {
    let mut config = ClientConfig::load_from(&ClientConfig::config_path()?)?;
    config.token = None;
    let path = config.save()?;
    if !ctx.cli.quiet {
        println!("Removed token from {}", path.display());
    }
    Ok(())
}
