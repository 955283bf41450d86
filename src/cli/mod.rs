//! CLI argument parsing for admit
//!
//! Global flags: --api-url, --token, --timeout, --format, --quiet, --verbose

pub mod output;
pub mod parse;

use clap::{Args, Parser, Subcommand};

use admit_core::category::Category;
pub use output::OutputFormat;
use parse::{
    parse_category, parse_item_ref, parse_scoped_query, parse_toggle_all, ItemRef, ScopedQuery,
};

/// Admit - admission year configuration client
#[derive(Parser, Debug)]
#[command(name = "admit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the admissions API
    #[arg(long, global = true, env = "ADMIT_API_URL")]
    pub api_url: Option<String>,

    /// Bearer token for the admissions API
    #[arg(long, global = true, env = "ADMIT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Output format: human or json
    #[arg(long, global = true, value_parser = output::parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. info, debug, admit_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the catalog of one category
    Catalog {
        /// Category: criteria, major, object, or region
        #[arg(value_parser = parse_category)]
        category: Category,

        /// Only show items whose name or id contains this text
        #[arg(long, short)]
        search: Option<String>,
    },

    /// Inspect or edit an admission year's configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Manage admission years
    #[command(subcommand)]
    Year(YearCommands),

    /// Show or change client settings
    #[command(subcommand)]
    Settings(SettingsCommands),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the selected criteria, majors, objects and regions of a year
    Show {
        /// Admission year identifier
        year: String,

        /// Narrow a category's listing (category=text), repeatable
        #[arg(long, value_parser = parse_scoped_query)]
        search: Vec<ScopedQuery>,
    },

    /// Change a year's configuration and save it
    ///
    /// Edits apply in this order: --clear, --toggle-all, --select, --deselect.
    Edit(EditArgs),
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Admission year identifier
    pub year: String,

    /// Select an item (category:id), repeatable
    #[arg(long, value_parser = parse_item_ref)]
    pub select: Vec<ItemRef>,

    /// Deselect an item (category:id), repeatable
    #[arg(long, value_parser = parse_item_ref)]
    pub deselect: Vec<ItemRef>,

    /// Toggle every item of a category passing an optional search (category[=text])
    #[arg(long, value_parser = parse_toggle_all)]
    pub toggle_all: Vec<ScopedQuery>,

    /// Deselect everything in a category, repeatable
    #[arg(long, value_parser = parse_category)]
    pub clear: Vec<Category>,

    /// Show the result without saving
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug)]
pub enum YearCommands {
    /// List admission years
    List,

    /// Create a new admission year
    Create {
        /// Year identifier
        #[arg(long, default_value = "")]
        id: String,

        /// Display name
        #[arg(long, default_value = "")]
        name: String,

        /// First day of the admission period (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        start: String,

        /// Last day of the admission period (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        end: String,

        /// Free-text description
        #[arg(long)]
        description: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show the effective settings
    Show,

    /// Persist a setting (api-url, timeout, token)
    Set {
        key: String,
        value: String,
    },

    /// Remove the stored token
    Logout,
}
