use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

/// Article looked up when none is given on the command line
pub const DEFAULT_ARTICLE: u64 = 56565656;

/// Command-line arguments for the lookup tool
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Wildberries article (product identifier) to look up
    #[arg(default_value_t = DEFAULT_ARTICLE)]
    pub article: u64,
    /// Optional path to a configuration file in YAML format
    #[arg(short, long)]
    pub config: Option<String>,
}

/// Catalog endpoint configuration.
///
/// Every field has a default, so an empty YAML document is a valid config.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Card detail endpoint, without query string
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// `appType` query parameter
    #[serde(default = "default_app_type")]
    pub app_type: u32,
    /// `curr` query parameter
    #[serde(default = "default_currency")]
    pub currency: String,
    /// `dest` query parameter, the delivery region
    #[serde(default = "default_dest")]
    pub dest: i64,
    /// `hide_dtype` query parameter
    #[serde(default = "default_hide_dtype")]
    pub hide_dtype: u32,
    /// `spp` query parameter
    #[serde(default = "default_spp")]
    pub spp: u32,
    /// `ab_testing` query parameter
    #[serde(default)]
    pub ab_testing: bool,
    /// `lang` query parameter
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Config {
    /// Reads the configuration from a YAML file
    ///
    /// # Arguments
    /// * `path` - Path to the YAML file
    pub fn from_file(path: &str) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file {}", path))?;
        let reader = BufReader::new(file);
        serde_yaml::from_reader(reader).context("Failed to parse config YAML")
    }

    /// Loads the file at `path` if one was given, otherwise the defaults
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            app_type: default_app_type(),
            currency: default_currency(),
            dest: default_dest(),
            hide_dtype: default_hide_dtype(),
            spp: default_spp(),
            ab_testing: false,
            lang: default_lang(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://card.wb.ru/cards/v2/detail".to_string()
}
fn default_app_type() -> u32 {
    1
}
fn default_currency() -> String {
    "rub".to_string()
}
fn default_dest() -> i64 {
    -3902910
}
fn default_hide_dtype() -> u32 {
    13
}
fn default_spp() -> u32 {
    30
}
fn default_lang() -> String {
    "ru".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
