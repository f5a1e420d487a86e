use thiserror::Error;

/// The single failure kind a screen fetch can produce.
///
/// Transport failures, non-2xx statuses and malformed JSON all end up here;
/// callers only ever learn that the data is unavailable, plus a message for
/// the diagnostic log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("data unavailable: {message}")]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        match (error.status(), error.url()) {
            (Some(status), Some(url)) => Self::new(format!("{} returned {}", url, status)),
            (None, Some(url)) => Self::new(format!("request to {} failed: {}", url, error)),
            _ => Self::new(error.to_string()),
        }
    }
}

/// Application level failures: config handling and the terminal host.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Configuration error: {message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },

    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFileError { path: String, reason: String },

    #[error("Parse error in {content_type}: {reason}")]
    ParseError { content_type: String, reason: String },

    #[error("System error during {operation}: {reason}")]
    SystemError { operation: String, reason: String },
}

impl DashboardError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Long form shown to the user by the CLI, with hints where we have them.
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::ParseError { content_type, reason } => {
                format!("Parse error in {}: {}\n💡 Check the format and syntax of the input", content_type, reason)
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;

impl From<std::io::Error> for DashboardError {
    fn from(error: std::io::Error) -> Self {
        Self::system_error("I/O operation", &error.to_string())
    }
}

impl From<toml::de::Error> for DashboardError {
    fn from(error: toml::de::Error) -> Self {
        Self::ParseError {
            content_type: "TOML".to_string(),
            reason: error.message().to_string(),
        }
    }
}

impl From<toml::ser::Error> for DashboardError {
    fn from(error: toml::ser::Error) -> Self {
        Self::system_error("TOML serialization", &error.to_string())
    }
}
