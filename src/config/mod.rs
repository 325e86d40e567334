#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Effective presentation settings after merging file and command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub format: OutputFormat,
    pub show_disclaimer: bool,
    pub unit: String,
    pub verbose: bool,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_disclaimer: true,
            unit: "mg".to_string(),
            verbose: false,
            log_format: LogFormat::Compact,
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            format: config.output.format.unwrap_or(defaults.format),
            show_disclaimer: config.output.show_disclaimer.unwrap_or(defaults.show_disclaimer),
            unit: config.output.unit.clone().unwrap_or(defaults.unit),
            verbose: config.logging.verbose.unwrap_or(defaults.verbose),
            log_format: config.logging.format.unwrap_or(defaults.log_format),
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("output.unit", &self.unit)
    }
}
