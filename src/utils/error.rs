use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Invalid {field} '{value}': {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Contact not found: {name}")]
    NotFound { name: String },

    #[error("Command '{command}' expects {expected} argument(s), got {actual}")]
    ArityError {
        command: String,
        expected: usize,
        actual: usize,
    },

    #[error("Unknown command: {command}")]
    UnknownCommand { command: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Lookup,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ContactError {
    pub fn validation(field: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationError { .. } | Self::ArityError { .. } | Self::UnknownCommand { .. } => {
                ErrorCategory::Input
            }
            Self::NotFound { .. } => ErrorCategory::Lookup,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Lookup => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 回傳給使用者看的訊息（REPL 直接印出）
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ValidationError { field, reason, .. } => match field.as_str() {
                "phone" => "Phone number must be a 10-digit number.".to_string(),
                "birthday" => "Invalid birthday format. Use DD.MM.YYYY.".to_string(),
                _ => format!("Invalid {}: {}", field, reason),
            },
            Self::NotFound { .. } => "Contact not found.".to_string(),
            Self::ArityError { .. } => "Invalid command arguments.".to_string(),
            Self::UnknownCommand { .. } => "Invalid command.".to_string(),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::IoError(e) => format!("I/O failure: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ValidationError { field, .. } if field == "birthday" => {
                "Enter the date as DD.MM.YYYY, e.g. 25.12.1990"
            }
            Self::ValidationError { .. } => "Check the value and try again",
            Self::NotFound { .. } => "Use 'all' to list saved contacts",
            Self::ArityError { .. } | Self::UnknownCommand { .. } => {
                "Type 'help' to see the available commands"
            }
            Self::ConfigError { .. } => "Fix the configuration file or run without --config",
            Self::IoError(_) => "Check that the file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, ContactError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_low_severity() {
        let err = ContactError::validation("phone", "123", "must be exactly 10 digits");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(
            err.user_friendly_message(),
            "Phone number must be a 10-digit number."
        );
    }

    #[test]
    fn test_dispatcher_messages() {
        let arity = ContactError::ArityError {
            command: "add".to_string(),
            expected: 2,
            actual: 1,
        };
        assert_eq!(arity.user_friendly_message(), "Invalid command arguments.");

        let unknown = ContactError::UnknownCommand {
            command: "fly".to_string(),
        };
        assert_eq!(unknown.user_friendly_message(), "Invalid command.");

        let missing = ContactError::NotFound {
            name: "Alice".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Lookup);
        assert_eq!(missing.user_friendly_message(), "Contact not found.");
    }

    #[test]
    fn test_config_error_severity() {
        let err = ContactError::ConfigError {
            message: "bad window".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.to_string().contains("bad window"));
    }
}
