use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MenuError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub app: AppConfig,
    pub menu: MenuConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MenuError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MenuError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment variable values.
    /// Unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("env placeholder pattern is valid");

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("app.name", &self.app.name)?;
        validation::validate_path("menu.path", &self.menu.path)?;
        validation::validate_file_extension("menu.path", &self.menu.path, &["csv"])?;
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn menu_path(&self) -> &str {
        &self.menu.path
    }

    fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|logging| logging.verbose)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[app]
name = "eatwell"
description = "Healthy menu browser"
version = "1.0.0"

[menu]
path = "./healthy_menu.csv"

[logging]
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.app.name, "eatwell");
        assert_eq!(config.menu_path(), "./healthy_menu.csv");
        assert!(config.verbose());
    }

    #[test]
    fn test_verbose_defaults_to_false() {
        let toml_content = r#"
[app]
name = "eatwell"
description = "test"
version = "1.0"

[menu]
path = "menu.csv"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(!config.verbose());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_MENU_PATH", "/tmp/test_menu.csv");

        let toml_content = r#"
[app]
name = "eatwell"
description = "test"
version = "1.0"

[menu]
path = "${TEST_MENU_PATH}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.menu.path, "/tmp/test_menu.csv");

        std::env::remove_var("TEST_MENU_PATH");
    }

    #[test]
    fn test_config_validation_rejects_non_csv_menu() {
        let toml_content = r#"
[app]
name = "eatwell"
description = "test"
version = "1.0"

[menu]
path = "menu.xlsx"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[app]
name = "file-test"
description = "File test"
version = "1.0"

[menu]
path = "./healthy_menu.csv"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.app.name, "file-test");
    }
}
