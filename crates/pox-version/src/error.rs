use thiserror::Error;

/// Error type for version, range and dependency parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A required input was empty
    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Invalid version string \"{0}\"")]
    MalformedVersion(String),

    #[error("Invalid version range \"{range}\": {reason}")]
    MalformedRange { range: String, reason: String },
}

impl ParseError {
    pub(crate) fn malformed_range(range: &str, reason: impl Into<String>) -> Self {
        ParseError::MalformedRange {
            range: range.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
