//! Shared context for command execution

use std::time::Instant;

use crate::cli::Cli;
use admit_core::api::HttpApi;
use admit_core::config::ClientConfig;
use admit_core::error::Result;

pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    /// Effective settings: file, then environment, then CLI flags
    pub config: ClientConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let mut config = ClientConfig::load()?;

        if let Some(url) = &cli.api_url {
            config.api_url = url.clone();
        }
        if let Some(token) = &cli.token {
            config.token = Some(token.clone());
        }
        if let Some(seconds) = cli.timeout {
            config.set_timeout_seconds(seconds);
        }

        Ok(Self { cli, config, start })
    }

    pub fn api(&self) -> Result<HttpApi> {
        HttpApi::from_config(&self.config)
    }
}
