use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid digit: {0:?}")]
    InvalidDigit(char),

    #[error("Invalid operator: {0:?}")]
    InvalidOperator(char),

    #[error("Unknown button: {label}")]
    UnknownButton { label: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    /// 給使用者看的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::InvalidDigit(c) => format!("'{}' is not a digit", c),
            CalcError::InvalidOperator(c) => format!("'{}' is not one of + - * / =", c),
            CalcError::UnknownButton { label } => format!("No button labelled '{}'", label),
            CalcError::IoError(e) => format!("Could not read or write: {}", e),
            CalcError::SerializationError(e) => format!("Could not encode output: {}", e),
            CalcError::ConfigError { message } => format!("Configuration problem: {}", message),
            CalcError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::InvalidDigit(_) | CalcError::InvalidOperator(_) => {
                "Use digits 0-9 and the operators + - * / ="
            }
            CalcError::UnknownButton { .. } => "Check the keypad layout for valid button labels",
            CalcError::IoError(_) => "Check that the file exists and is readable",
            CalcError::SerializationError(_) => "Try the text output format",
            CalcError::ConfigError { .. } | CalcError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and try again"
            }
        }
    }

    /// 錯誤訊息加上建議, 給 CLI 輸出到 stderr
    pub fn report(&self) -> String {
        format!(
            "❌ {}\n💡 {}",
            self.user_friendly_message(),
            self.recovery_suggestion()
        )
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CalcError::ConfigError { .. } | CalcError::InvalidConfigValueError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
