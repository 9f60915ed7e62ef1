use crate::utils::error::{Result, StatsError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub report: ReportInfo,
    pub source: SourceConfig,
    pub filter: Option<FilterConfig>,
    pub top: Option<TopConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    pub min_age: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopConfig {
    pub count: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Err(StatsError::ConfigError {
                message: format!("Config file not found: {}", path),
            });
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// 從字串解析配置
    pub fn from_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("report.name", &self.report.name)?;
        validation::validate_path("source.path", &self.source.path)?;
        validation::validate_file_extension("source.path", &self.source.path, &["csv", "txt"])?;

        if let Some(top) = &self.top {
            if let Some(count) = top.count {
                validation::validate_positive_number("top.count", count, 1)?;
            }
        }

        if let Some(filter) = &self.filter {
            if let Some(min_age) = filter.min_age {
                validation::validate_range("filter.min_age", min_age, 0, 150)?;
            }
        }

        Ok(())
    }
}
