pub mod toml_config;

use crate::adapters::display::OutputFormat;
use crate::adapters::keyboard::Keymap;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "small-calc"))]
#[cfg_attr(
    feature = "cli",
    command(about = "A four-function keypad calculator driven by key names")
)]
pub struct CliConfig {
    /// Whitespace-separated key names, e.g. "5 + 3 Enter". Reads stdin when omitted
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub keys: Option<String>,

    /// Path to a TOML configuration file
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    /// Output format, overrides the configuration file
    #[cfg_attr(feature = "cli", arg(long, value_enum))]
    pub format: Option<OutputFormat>,

    /// Render the display after every key instead of only at the end
    #[cfg_attr(feature = "cli", arg(long))]
    pub trace: bool,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,
}

/// Settings after the command line has been merged over the TOML file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub keymap: Keymap,
    pub format: OutputFormat,
    pub trace: bool,
}

impl CliConfig {
    pub fn load_toml(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => {
                tracing::debug!(path = %path, "loading configuration file");
                let toml = TomlConfig::from_file(path)?;
                toml.validate()?;
                Ok(toml)
            }
            None => Ok(TomlConfig::default()),
        }
    }

    /// 命令列參數優先於設定檔
    pub fn resolve(&self) -> Result<Settings> {
        let toml = self.load_toml()?;

        Ok(Settings {
            keymap: toml.keymap(),
            format: self.format.or(toml.format()).unwrap_or_default(),
            trace: self.trace || toml.trace().unwrap_or(false),
        })
    }
}
