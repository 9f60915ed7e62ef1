use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl StatsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StatsError::IoError(_) => ErrorCategory::Io,
            StatsError::TomlError(_)
            | StatsError::ConfigError { .. }
            | StatsError::MissingConfigError { .. }
            | StatsError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            StatsError::ProcessingError { .. } => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 資料問題一律降級處理，不會中斷流程
            StatsError::ProcessingError { .. } => ErrorSeverity::Low,
            StatsError::IoError(_) => ErrorSeverity::Medium,
            StatsError::TomlError(_)
            | StatsError::ConfigError { .. }
            | StatsError::MissingConfigError { .. }
            | StatsError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StatsError::IoError(e) => format!("File operation failed: {}", e),
            StatsError::TomlError(e) => format!("Config file is not valid TOML: {}", e),
            StatsError::ConfigError { message } => format!("Configuration problem: {}", message),
            StatsError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
            StatsError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for {}: {}", value, field, reason)
            }
            StatsError::ProcessingError { message } => {
                format!("Data could not be processed: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Io => "Check that the file exists and is readable".to_string(),
            ErrorCategory::Configuration => {
                "Review the command-line flags and config file values".to_string()
            }
            ErrorCategory::Data => "Inspect the input CSV for malformed rows".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
