use miette::Diagnostic;
use thiserror::Error;

/// Main error type for starforge operations
#[derive(Error, Diagnostic, Debug)]
pub enum StarError {
    #[error("IO error: {0}")]
    #[diagnostic(code(starforge::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(starforge::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(starforge::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(starforge::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid dimension: {message}")]
    #[diagnostic(code(starforge::dimension))]
    InvalidDimension {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("No generator found for star type \"{name}\"")]
    #[diagnostic(code(starforge::unknown_type))]
    UnknownSurfaceType {
        name: String,
        #[help]
        help: Option<String>,
    },

    #[error("Missing required parameter: {message}")]
    #[diagnostic(code(starforge::missing_parameter))]
    MissingRequiredParameter {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl StarError {
    /// Shorthand for a non-positive size error.
    pub fn invalid_dimension(width: i64, height: i64) -> Self {
        StarError::InvalidDimension {
            message: format!("{}x{} is not a drawable size", width, height),
            help: Some("Width and height must both be greater than zero".to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StarError>;
