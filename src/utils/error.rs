use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelloError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Configuration render error: {message}")]
    ConfigRenderError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Integer overflow: {a} + {b}")]
    Overflow { a: i64, b: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl HelloError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            HelloError::IoError(_) => ErrorSeverity::Critical,
            HelloError::ConfigParseError { .. }
            | HelloError::ConfigRenderError { .. }
            | HelloError::InvalidConfigValueError { .. }
            | HelloError::Overflow { .. } => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HelloError::IoError(e) => format!("Could not read or write: {}", e),
            HelloError::ConfigParseError { message } => {
                format!("The configuration file is not valid TOML: {}", message)
            }
            HelloError::ConfigRenderError { message } => {
                format!("The resolved configuration could not be shown: {}", message)
            }
            HelloError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            HelloError::Overflow { a, b } => {
                format!("{} + {} does not fit in a 64-bit integer", a, b)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HelloError::IoError(_) => "Check that the file exists and that stdout is writable",
            HelloError::ConfigParseError { .. } => "Fix the TOML syntax in the configuration file",
            HelloError::ConfigRenderError { .. } => "Run again without --dry-run",
            HelloError::InvalidConfigValueError { .. } => {
                "Correct the highlighted field and run again"
            }
            HelloError::Overflow { .. } => "Use smaller addends",
        }
    }
}

pub type Result<T> = std::result::Result<T, HelloError>;
