use crate::domain::model::Operand;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Invalid {operand} number '{input}': {reason}")]
    InputFormatError {
        operand: Operand,
        input: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CompareError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CompareError::InputFormatError { .. } => ErrorCategory::Input,
            CompareError::ConfigError { .. } | CompareError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            CompareError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 依錯誤嚴重程度決定程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CompareError::InputFormatError { operand, input, .. } if input.is_empty() => {
                format!("No {} number was entered", operand)
            }
            CompareError::InputFormatError { operand, input, .. } => {
                format!("'{}' is not a valid {} number", input, operand)
            }
            CompareError::IoError(e) => format!("Console I/O failed: {}", e),
            CompareError::ConfigError { message } => {
                format!("Could not load settings: {}", message)
            }
            CompareError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CompareError::InputFormatError { .. } => {
                "Enter whole numbers only, for example 42 or -7".to_string()
            }
            CompareError::IoError(_) => {
                "Check that standard input and output are connected to a terminal or pipe"
                    .to_string()
            }
            CompareError::ConfigError { .. } => {
                "Make sure the settings file exists and is valid TOML".to_string()
            }
            CompareError::InvalidConfigValueError { field, .. } => {
                format!("Fix or remove '{}' in the settings file", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CompareError>;
