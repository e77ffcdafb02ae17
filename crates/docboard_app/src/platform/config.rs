use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use docboard_core::{
    ConfigError, FilterCriteria, RoleTable, SortCriteria, StatusFilter, ViewConfig,
};
use docboard_engine::ClientSettings;
use log::LevelFilter;
use serde::Deserialize;

use super::cli::Cli;
use super::logging::LogDestination;

const DEFAULT_CONFIG_FILE: &str = "docboard.ron";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct SortSpec {
    field: String,
    direction: String,
}

/// On-disk shape of `docboard.ron`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    base_url: String,
    property_type_id: Option<u64>,
    rows_per_page: usize,
    default_sort: SortSpec,
    default_status: String,
    connect_timeout_secs: u64,
    request_timeout_secs: u64,
    max_response_bytes: u64,
    /// Additional permission code to role label entries.
    extra_roles: BTreeMap<String, String>,
    /// Display text overrides keyed by localization key.
    strings: BTreeMap<String, String>,
    log: LogDestination,
}

impl Default for ConfigFile {
    fn default() -> Self {
        let client = ClientSettings::default();
        let view = ViewConfig::default();
        let sort = view.default_sort();
        Self {
            base_url: client.base_url,
            property_type_id: None,
            rows_per_page: view.rows_per_page(),
            default_sort: SortSpec {
                field: sort.field.as_str().to_string(),
                direction: sort.direction.as_str().to_string(),
            },
            default_status: "all".to_string(),
            connect_timeout_secs: client.connect_timeout.as_secs(),
            request_timeout_secs: client.request_timeout.as_secs(),
            max_response_bytes: client.max_bytes,
            extra_roles: BTreeMap::new(),
            strings: BTreeMap::new(),
            log: LogDestination::default(),
        }
    }
}

/// Validated settings for one run.
#[derive(Debug, Clone)]
pub(crate) struct AppSettings {
    pub view: ViewConfig,
    pub client: ClientSettings,
    pub log: LogDestination,
    pub log_level: LevelFilter,
    pub strings: BTreeMap<String, String>,
}

/// Reads the config file (explicit path, or the default file if present) and
/// applies command-line overrides.
pub(crate) fn load(cli: &Cli) -> anyhow::Result<AppSettings> {
    let file = match &cli.config {
        Some(path) => read_config_file(path)?,
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                read_config_file(&default_path)?
            } else {
                ConfigFile::default()
            }
        }
    };
    let settings = file.into_settings(cli).context("invalid configuration")?;
    Ok(settings)
}

fn read_config_file(path: &Path) -> anyhow::Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_config(&content).with_context(|| format!("failed to parse config file {}", path.display()))
}

fn parse_config(content: &str) -> Result<ConfigFile, ron::error::SpannedError> {
    ron::from_str(content)
}

impl ConfigFile {
    fn into_settings(self, cli: &Cli) -> Result<AppSettings, ConfigError> {
        let default_sort = SortCriteria::new(
            self.default_sort.field.parse()?,
            self.default_sort.direction.parse()?,
        );
        let default_status: StatusFilter = self.default_status.parse()?;
        let roles = self
            .extra_roles
            .into_iter()
            .fold(RoleTable::default(), |roles, (code, label)| {
                roles.with_entry(code, label)
            });

        let view = ViewConfig::new()
            .with_default_sort(default_sort)
            .with_default_filters(FilterCriteria::default().with_status(default_status))
            .with_roles(roles)
            .with_property_type(cli.property_type.or(self.property_type_id))
            .with_rows_per_page(self.rows_per_page)?;

        let client = ClientSettings {
            base_url: cli.base_url.clone().unwrap_or(self.base_url),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_response_bytes,
        };

        Ok(AppSettings {
            view,
            client,
            log: cli.log.unwrap_or(self.log),
            log_level: if cli.verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
            strings: self.strings,
        })
    }
}
