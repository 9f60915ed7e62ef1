pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::TomlConfig;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT: &str = "users.csv";
pub const DEFAULT_MIN_AGE: i64 = 30;
pub const DEFAULT_TOP_COUNT: usize = 3;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "user-stats")]
#[command(about = "Descriptive aggregates over a users CSV file")]
pub struct CliConfig {
    /// Operation to run (summary|filter|group|avg|top|region)
    #[arg(default_value = "summary")]
    pub operation: String,

    /// Path to the input CSV file
    #[arg(long)]
    pub input: Option<String>,

    /// Minimum age used by the filter operation
    #[arg(long)]
    pub min_age: Option<i64>,

    /// Number of records reported by the top operation
    #[arg(long)]
    pub top_count: Option<usize>,

    /// Optional TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 套用設定檔的值；命令列參數優先
    pub fn merge_file(&mut self, file: &TomlConfig) {
        if self.input.is_none() {
            self.input = Some(file.source.path.clone());
        }
        if self.min_age.is_none() {
            self.min_age = file.filter.as_ref().and_then(|f| f.min_age);
        }
        if self.top_count.is_none() {
            self.top_count = file.top.as_ref().and_then(|t| t.count);
        }
        if !self.monitor {
            self.monitor = file.monitoring_enabled();
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        self.input.as_deref().unwrap_or(DEFAULT_INPUT)
    }

    fn operation(&self) -> &str {
        &self.operation
    }

    fn min_age(&self) -> i64 {
        self.min_age.unwrap_or(DEFAULT_MIN_AGE)
    }

    fn top_count(&self) -> usize {
        self.top_count.unwrap_or(DEFAULT_TOP_COUNT)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", self.input_path())?;
        validation::validate_file_extension("input", self.input_path(), &["csv", "txt"])?;
        validation::validate_positive_number("top_count", self.top_count(), 1)?;
        validation::validate_range("min_age", self.min_age(), 0, 150)?;
        Ok(())
    }
}
