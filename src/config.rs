//! Runtime settings.
//!
//! Defaults live in constants; each can be overridden through the environment
//! (a `.env` file is loaded by `main` via dotenv).

use std::env;
use std::error::Error;

/// Default log4rs configuration file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

pub const ENV_LIST_FILE: &str = "NETADDR_LIST_FILE";
pub const ENV_OUTPUT: &str = "NETADDR_OUTPUT";
pub const ENV_SHOW_GAPS: &str = "NETADDR_SHOW_GAPS";
pub const ENV_LOOKUP: &str = "NETADDR_LOOKUP";
pub const ENV_LOG_CONFIG: &str = "NETADDR_LOG_CONFIG";

/// Report layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {other}").into()),
        }
    }
}

/// Settings for one run of the summary tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address list to read; `None` reads stdin.
    pub list_file: Option<String>,
    pub output: OutputFormat,
    pub show_gaps: bool,
    /// Addresses to test against the collapsed list.
    pub lookup: Vec<String>,
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            list_file: None,
            output: OutputFormat::Csv,
            show_gaps: true,
            lookup: vec![],
            log_config: DEFAULT_LOG_CONFIG.to_string(),
        }
    }
}

impl Config {
    /// Build from the process environment; `arg_file` (first CLI argument)
    /// takes precedence over `NETADDR_LIST_FILE`.
    pub fn from_env(arg_file: Option<String>) -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(arg_file, |key| env::var(key).ok())
    }

    /// Build from any key lookup, so tests need not touch the real environment.
    pub fn from_lookup<F>(arg_file: Option<String>, var: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config {
            list_file: arg_file
                .or_else(|| var(ENV_LIST_FILE))
                .filter(|f| !f.trim().is_empty() && f.trim() != "-"),
            ..Config::default()
        };

        if let Some(output) = var(ENV_OUTPUT) {
            config.output = output.parse()?;
        }
        if let Some(gaps) = var(ENV_SHOW_GAPS) {
            config.show_gaps = parse_bool(&gaps)
                .ok_or_else(|| format!("Invalid {ENV_SHOW_GAPS} value: {gaps}"))?;
        }
        if let Some(lookup) = var(ENV_LOOKUP) {
            config.lookup = lookup
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(log_config) = var(ENV_LOG_CONFIG) {
            config.log_config = log_config;
        }

        log::debug!("config: {config:?}");
        Ok(config)
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
