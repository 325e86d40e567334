use crate::config::{LogFormat, OutputFormat};
use crate::utils::error::{DoseError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub show_disclaimer: Option<bool>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub format: Option<LogFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DoseError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DoseError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DOSE_UNIT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern compiles"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(unit) = &self.output.unit {
            validate_non_empty_string("output.unit", unit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[output]
format = "json"
show_disclaimer = false
unit = "mg"

[logging]
verbose = true
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert_eq!(config.output.show_disclaimer, Some(false));
        assert_eq!(config.logging.verbose, Some(true));
        assert_eq!(config.logging.format, Some(LogFormat::Json));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.output.format.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("INR_DOSE_TEST_UNIT", "milligrams");

        let config = TomlConfig::from_toml_str("[output]\nunit = \"${INR_DOSE_TEST_UNIT}\"\n").unwrap();
        assert_eq!(config.output.unit.as_deref(), Some("milligrams"));

        std::env::remove_var("INR_DOSE_TEST_UNIT");
    }

    #[test]
    fn test_unset_env_var_left_in_place() {
        let config =
            TomlConfig::from_toml_str("[output]\nunit = \"${INR_DOSE_TEST_UNSET_VAR}\"\n").unwrap();
        assert_eq!(config.output.unit.as_deref(), Some("${INR_DOSE_TEST_UNSET_VAR}"));
    }

    #[test]
    fn test_rejects_unknown_format_and_keys() {
        assert!(TomlConfig::from_toml_str("[output]\nformat = \"xml\"\n").is_err());
        assert!(TomlConfig::from_toml_str("[output]\ncolour = true\n").is_err());
    }

    #[test]
    fn test_blank_unit_fails_validation() {
        let config = TomlConfig::from_toml_str("[output]\nunit = \"  \"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\nshow_disclaimer = false\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output.show_disclaimer, Some(false));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/nonexistent/inr-dose.toml").unwrap_err();
        assert!(matches!(err, DoseError::IoError(_)));
    }
}
