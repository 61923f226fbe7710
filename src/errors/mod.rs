use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PrlyzerError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
    },

    // Pre-analysis gating errors
    UnsupportedFile {
        file_path: String,
        extension: String,
    },
    FileTooLarge {
        file_path: String,
        size: usize,
        max_size: usize,
    },

    // Engine output could not be turned into a typed report
    MalformedAnalysisResponse {
        reason: String,
        context: Option<String>,
    },

    // Source host (pull request gateway) errors - fatal to the whole pass
    SourceHostUnavailable {
        operation: String,
        status_code: Option<u16>,
        reason: String,
    },

    // Engine transport/auth errors - per-file, tolerated by the orchestrator
    AnalysisEngineError {
        operation: String,
        status_code: Option<u16>,
        reason: String,
    },

    // Lookup errors
    NotFound {
        resource: String,
        id: String,
    },

    // Lifecycle errors
    InvalidTransition {
        from: String,
        to: String,
    },

    // Persistence errors
    StorageError {
        operation: String,
        reason: String,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl PrlyzerError {
    pub fn config_error(message: &str, field: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
        }
    }

    pub fn unsupported_file(file_path: &str, extension: &str) -> Self {
        Self::UnsupportedFile {
            file_path: file_path.to_string(),
            extension: extension.to_string(),
        }
    }

    pub fn file_too_large(file_path: &str, size: usize, max_size: usize) -> Self {
        Self::FileTooLarge {
            file_path: file_path.to_string(),
            size,
            max_size,
        }
    }

    pub fn malformed_response(reason: &str, context: Option<&str>) -> Self {
        Self::MalformedAnalysisResponse {
            reason: reason.to_string(),
            context: context.map(|s| s.to_string()),
        }
    }

    pub fn source_host_error(operation: &str, status_code: Option<u16>, reason: &str) -> Self {
        Self::SourceHostUnavailable {
            operation: operation.to_string(),
            status_code,
            reason: reason.to_string(),
        }
    }

    pub fn engine_error(operation: &str, status_code: Option<u16>, reason: &str) -> Self {
        Self::AnalysisEngineError {
            operation: operation.to_string(),
            status_code,
            reason: reason.to_string(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    pub fn invalid_transition(from: &str, to: &str) -> Self {
        Self::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn storage_error(operation: &str, reason: &str) -> Self {
        Self::StorageError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether the orchestrator's per-file loop may swallow this error and
    /// keep going. Source host and storage failures abort the whole pass.
    pub fn is_file_local(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedFile { .. }
                | Self::FileTooLarge { .. }
                | Self::MalformedAnalysisResponse { .. }
                | Self::AnalysisEngineError { .. }
        )
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field } => {
                let mut msg = format!("Configuration error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                msg
            }
            Self::UnsupportedFile { file_path, extension } => {
                format!("File '{}' has unsupported extension '{}'\n💡 Check the supported_extensions allow-list", file_path, extension)
            }
            Self::FileTooLarge { file_path, size, max_size } => {
                format!("File '{}' is too large to analyze: {} bytes (limit {})", file_path, size, max_size)
            }
            Self::MalformedAnalysisResponse { reason, context } => {
                let mut msg = format!("Analysis engine response could not be parsed: {}", reason);
                if let Some(ctx) = context {
                    msg.push_str(&format!("\nContext: {}", ctx));
                }
                msg
            }
            Self::SourceHostUnavailable { operation, status_code, reason } => {
                let mut msg = format!("Source host error during {}: {}", operation, reason);
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg.push_str("\n💡 Check your token and network connection");
                msg
            }
            Self::AnalysisEngineError { operation, status_code, reason } => {
                let mut msg = format!("Analysis engine error during {}: {}", operation, reason);
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg
            }
            Self::NotFound { resource, id } => {
                format!("{} '{}' not found", resource, id)
            }
            Self::InvalidTransition { from, to } => {
                format!("Invalid analysis status transition {} -> {}", from, to)
            }
            Self::StorageError { operation, reason } => {
                format!("Storage error during {}: {}", operation, reason)
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for PrlyzerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for PrlyzerError {}

/// Result type alias for prlyzer operations
pub type PrlyzerResult<T> = Result<T, PrlyzerError>;

impl From<std::io::Error> for PrlyzerError {
    fn from(error: std::io::Error) -> Self {
        PrlyzerError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for PrlyzerError {
    fn from(error: serde_json::Error) -> Self {
        PrlyzerError::MalformedAnalysisResponse {
            reason: error.to_string(),
            context: Some(format!("line {}", error.line())),
        }
    }
}

impl From<toml::de::Error> for PrlyzerError {
    fn from(error: toml::de::Error) -> Self {
        PrlyzerError::ConfigurationError {
            message: error.message().to_string(),
            field: None,
        }
    }
}

impl From<reqwest::Error> for PrlyzerError {
    fn from(error: reqwest::Error) -> Self {
        PrlyzerError::SourceHostUnavailable {
            operation: "HTTP request".to_string(),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}
