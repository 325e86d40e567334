use crate::config::{OutputFormat, Settings, TomlConfig};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "inr-dose")]
#[command(about = "Suggest a weekly warfarin dose from an INR result")]
pub struct CliConfig {
    /// Current INR result, e.g. 2.3
    #[arg(long)]
    pub inr: String,

    /// Current weekly dose in mg, e.g. 35
    #[arg(long)]
    pub dose: String,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the output format from the config file
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Do not print the informational disclaimer")]
    pub no_disclaimer: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Load the config file (if any) and apply command line overrides on top.
    pub fn resolve_settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                let file_config = TomlConfig::from_file(path)?;
                file_config.validate()?;
                Settings::from_toml(&file_config)
            }
            None => Settings::default(),
        };

        if let Some(format) = self.format {
            settings.format = format;
        }
        if self.no_disclaimer {
            settings.show_disclaimer = false;
        }
        if self.verbose {
            settings.verbose = true;
        }

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_arguments() {
        let cli = CliConfig::parse_from(["inr-dose", "--inr", "2.3", "--dose", "35"]);
        assert_eq!(cli.inr, "2.3");
        assert_eq!(cli.dose, "35");
        assert!(cli.config.is_none());

        let settings = cli.resolve_settings().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\nformat = \"text\"\n\n[logging]\nformat = \"json\"\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "inr-dose",
            "--inr",
            "1.8",
            "--dose",
            "35",
            "--config",
            path.as_str(),
            "--format",
            "json",
            "--no-disclaimer",
        ]);
        let settings = cli.resolve_settings().unwrap();

        assert_eq!(settings.format, OutputFormat::Json);
        assert!(!settings.show_disclaimer);
        assert_eq!(settings.log_format, LogFormat::Json);
    }
}
