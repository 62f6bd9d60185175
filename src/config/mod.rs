pub mod toml_config;

use crate::app::LUKE_SKYWALKER_URL;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

/// 要執行的管道變體
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Deferred,
    #[default]
    Async,
    Stream,
    /// Run every variant and require identical results.
    All,
}

/// Effective settings after merging the TOML file with command line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub root_url: String,
    pub variant: Variant,
    pub pretty: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_url: LUKE_SKYWALKER_URL.to_string(),
            variant: Variant::default(),
            pretty: false,
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        let defaults = Settings::default();
        Self {
            root_url: config.source.root_url.clone().unwrap_or(defaults.root_url),
            variant: config.output.variant.unwrap_or(defaults.variant),
            pretty: config.output.pretty.unwrap_or(defaults.pretty),
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("root_url", &self.root_url)
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "swapi-aggregator")]
#[command(about = "Fetch a Star Wars character together with its homeworld and films")]
pub struct CliConfig {
    #[arg(long, help = "URL of the people resource to aggregate")]
    pub root_url: Option<String>,

    #[arg(long, value_enum, help = "Pipeline variant to run")]
    pub variant: Option<Variant>,

    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Pretty-print the JSON result")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併設定檔與命令列參數，命令列優先
    pub fn resolve(&self) -> Result<Settings> {
        let file_config = match &self.config {
            Some(path) => {
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                config
            }
            None => TomlConfig::default(),
        };

        let mut settings = Settings::from_toml(&file_config);
        if let Some(root_url) = &self.root_url {
            settings.root_url = root_url.clone();
        }
        if let Some(variant) = self.variant {
            settings.variant = variant;
        }
        settings.pretty |= self.pretty;

        settings.validate()?;
        Ok(settings)
    }
}
