pub mod file;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "eatwell")]
#[command(about = "Browse a healthy menu and tally a cart of selected dishes")]
pub struct CliConfig {
    #[arg(long, default_value = "healthy_menu.csv")]
    pub menu_path: String,

    #[arg(long, help = "TOML config file; its menu path overrides --menu-path")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn menu_path(&self) -> &str {
        &self.menu_path
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("menu_path", &self.menu_path)?;
        validation::validate_file_extension("menu_path", &self.menu_path, &["csv"])?;
        Ok(())
    }
}
