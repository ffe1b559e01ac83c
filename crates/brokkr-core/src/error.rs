//! Error types for brokkr-core

use thiserror::Error;

/// Result type alias using brokkr-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Diagnostic phrases Terraform emits for variable/schema problems.
///
/// Matching one of these classifies an engine failure as a configuration
/// error. The diagnostic text itself is always surfaced verbatim.
const CONFIGURATION_PHRASES: &[&str] = &[
    "No value for required variable",
    "Value for undeclared variable",
    "Invalid value for input variable",
    "Unsupported argument",
    "Missing required argument",
];

/// Core error types for Brokkr
#[derive(Error, Debug)]
pub enum Error {
    /// Module directory does not exist on disk
    #[error("Module directory not found: {path}")]
    ModuleDirNotFound { path: String },

    /// Variables rejected against the module's declared schema
    #[error("Configuration rejected by {operation}:\n{diagnostic}")]
    Configuration {
        operation: String,
        diagnostic: String,
    },

    /// The engine process could not be started at all
    #[error("Failed to invoke {tool}: {message}")]
    Invocation { tool: String, message: String },

    /// The engine ran and reported failure
    #[error("{operation} failed:\n{diagnostic}")]
    EngineFailure {
        operation: String,
        diagnostic: String,
    },

    /// Teardown failed after the plan step; resources may have leaked
    #[error("Teardown failed, resources may have leaked:\n{diagnostic}")]
    Teardown { diagnostic: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Create a module directory not found error
    pub fn module_dir_not_found(path: impl Into<String>) -> Self {
        Self::ModuleDirNotFound { path: path.into() }
    }

    /// Create an invocation error
    pub fn invocation(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invocation {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a teardown error
    pub fn teardown(diagnostic: impl Into<String>) -> Self {
        Self::Teardown {
            diagnostic: diagnostic.into(),
        }
    }

    /// Classify an engine diagnostic into the error taxonomy.
    ///
    /// The diagnostic is carried verbatim either way; only the variant is
    /// chosen by matching Terraform's stable diagnostic phrases, so callers
    /// can match on the taxonomy instead of grepping error text.
    pub fn from_engine_diagnostic(
        operation: impl Into<String>,
        diagnostic: impl Into<String>,
    ) -> Self {
        let operation = operation.into();
        let diagnostic = diagnostic.into();

        if CONFIGURATION_PHRASES.iter().any(|p| diagnostic.contains(p)) {
            Self::Configuration {
                operation,
                diagnostic,
            }
        } else {
            Self::EngineFailure {
                operation,
                diagnostic,
            }
        }
    }

    /// Whether this error is a variable/schema configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Whether this error came from a failed teardown
    pub fn is_teardown(&self) -> bool {
        matches!(self, Self::Teardown { .. })
    }
}
