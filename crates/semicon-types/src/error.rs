use thiserror::Error;

#[derive(Error, Debug)]
pub enum SemiconError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },

    #[error("Undefined math: {0}")]
    UndefinedMath(String),

    #[error("Numeric overflow: {0}")]
    Overflow(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SemiconError {
    /// Stable machine-readable tag, used as the `kind` field of error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            SemiconError::InvalidParameter(_) => "invalid_parameter",
            SemiconError::NotFound { .. } => "not_found",
            SemiconError::UndefinedMath(_) => "undefined_math",
            SemiconError::Overflow(_) => "overflow",
            SemiconError::ConfigError(_) => "config",
            SemiconError::Io(_) => "io",
            SemiconError::Json(_) => "json",
        }
    }
}

pub type SemiconResult<T> = Result<T, SemiconError>;
