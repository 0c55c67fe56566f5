use thiserror::Error;

/// The constraint a request field failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Constraint {
    #[error("is required")]
    Missing,

    #[error("must not be empty")]
    Empty,

    #[error("must be a whole number, got \"{0}\"")]
    NotNumeric(String),

    #[error("must be between {min} and {max}, got {actual}")]
    OutOfRange { min: i64, max: i64, actual: i64 },

    #[error("is not a valid calendar date: \"{0}\"")]
    InvalidDate(String),

    #[error("names an unknown platform \"{0}\"")]
    UnknownPlatform(String),

    #[error("\"{value}\" is not one of {expected}")]
    NotInEnum { value: String, expected: &'static str },
}

/// First offending field of a campaign request.
///
/// Always recoverable: the caller should ask for corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {constraint}")]
pub struct ValidationError {
    /// Request field name as it appears on the wire (camelCase).
    pub field: &'static str,
    pub constraint: Constraint,
}

impl ValidationError {
    pub(crate) fn new(field: &'static str, constraint: Constraint) -> Self {
        Self { field, constraint }
    }

    /// `true` when the field was absent or blank rather than malformed.
    #[must_use]
    pub fn is_presence(&self) -> bool {
        matches!(self.constraint, Constraint::Missing | Constraint::Empty)
    }
}

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid campaign request: {0}")]
    Validation(#[from] ValidationError),

    /// An internal invariant did not hold. Never expected in normal operation.
    #[error("plan contract violated: {detail}")]
    ContractViolation { detail: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read campaign request {path}: {source}")]
    RequestFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse campaign request: {0}")]
    RequestFileParse(#[from] serde_yaml::Error),
}
