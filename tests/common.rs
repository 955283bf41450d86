use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;

/// An `admit` command isolated from the user's config and environment
pub fn admit(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("admit");
    cmd.env("ADMIT_CONFIG_DIR", config_dir)
        .env_remove("ADMIT_API_URL")
        .env_remove("ADMIT_TOKEN")
        .env_remove("ADMIT_TIMEOUT")
        .env_remove("ADMIT_LOG");
    cmd
}

/// An address where nothing listens
#[allow(dead_code)]
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9/api";
