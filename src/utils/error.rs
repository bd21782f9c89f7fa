use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Factorial is not defined for negative numbers (got {n})")]
    NegativeArgument { n: i32 },

    #[error("Fibonacci term count must be a positive integer (got {count})")]
    NonPositiveCount { count: i32 },

    #[error("{operation}({argument}) overflows its accumulator (largest exact argument is {max_argument})")]
    Overflow {
        operation: &'static str,
        argument: i32,
        max_argument: i32,
    },

    #[error("Invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Domain,
    Input,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DemoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DemoError::NegativeArgument { .. }
            | DemoError::NonPositiveCount { .. }
            | DemoError::Overflow { .. } => ErrorCategory::Domain,
            DemoError::InvalidInput { .. } => ErrorCategory::Input,
            DemoError::IoError(_) | DemoError::SerializationError(_) | DemoError::CsvError(_) => {
                ErrorCategory::Output
            }
            DemoError::ConfigError { .. }
            | DemoError::ConfigValidationError { .. }
            | DemoError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Domain errors are reported and the run still exits cleanly, so they rank lowest.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Domain => ErrorSeverity::Low,
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn is_domain_error(&self) -> bool {
        self.category() == ErrorCategory::Domain
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::NegativeArgument { .. } => {
                "Factorial is not defined for negative numbers.".to_string()
            }
            DemoError::NonPositiveCount { .. } => {
                "Please enter a positive integer for Fibonacci terms.".to_string()
            }
            DemoError::Overflow {
                operation,
                argument,
                ..
            } => format!("The result of {}({}) does not fit the accumulator.", operation, argument),
            DemoError::InvalidInput { input, .. } => {
                format!("'{}' is not a valid integer.", input)
            }
            DemoError::IoError(e) => format!("Could not write output: {}", e),
            DemoError::SerializationError(e) => format!("Could not encode JSON output: {}", e),
            DemoError::CsvError(e) => format!("Could not encode CSV output: {}", e),
            DemoError::ConfigError { message } => format!("Configuration problem: {}", message),
            DemoError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            DemoError::InvalidConfigValueError { field, value, .. } => {
                format!("Configuration field '{}' has an invalid value '{}'.", field, value)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DemoError::NegativeArgument { .. } => "Pass a number that is zero or greater.".to_string(),
            DemoError::NonPositiveCount { .. } => "Ask for at least one term.".to_string(),
            DemoError::Overflow { max_argument, .. } => format!(
                "Use an argument no larger than {}, or switch to --overflow wrap.",
                max_argument
            ),
            DemoError::InvalidInput { .. } => {
                "Enter a whole number such as 5 or -3.".to_string()
            }
            DemoError::IoError(_) | DemoError::SerializationError(_) | DemoError::CsvError(_) => {
                "Check that standard output is writable.".to_string()
            }
            DemoError::ConfigError { .. } => {
                "Check that the config file exists and is valid TOML.".to_string()
            }
            DemoError::ConfigValidationError { field, .. }
            | DemoError::InvalidConfigValueError { field, .. } => {
                format!("Fix '{}' in the config file or override it on the command line.", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
