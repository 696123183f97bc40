use std::fmt;

/// Result type for typedump-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building the value model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A renderer was keyed with an empty or all-whitespace type name
    Configuration(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Configuration(_) => None,
        }
    }
}
