use std::path::PathBuf;

use clap::Parser;

use super::logging::LogDestination;

/// Filter, sort and process documents from the terminal.
#[derive(Parser, Debug, Default)]
#[command(name = "docboard", version)]
pub struct Cli {
    /// RON configuration file. Defaults to `./docboard.ron` when present.
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Backend base URL; overrides the config file.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Only list documents of this property type.
    #[arg(long)]
    pub property_type: Option<u64>,

    /// Where log output goes; overrides the config file.
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,

    /// Log at debug level.
    #[arg(long, short)]
    pub verbose: bool,
}
