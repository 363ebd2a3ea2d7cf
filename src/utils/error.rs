use std::error::Error;
use std::fmt;

/// Common result type for Tocify operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for Tocify operations
#[derive(Debug)]
pub enum TocifyError {
    /// A configured marker class matched no element in the document
    MissingElement(String),
    /// A node handle does not belong to the document it was used with
    Detached(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for TocifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TocifyError::MissingElement(class) => {
                write!(f, "Missing required element: no element carries class '{}'", class)
            }
            TocifyError::Detached(what) => write!(f, "Detached node: {}", what),
            TocifyError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for TocifyError {}

impl From<String> for TocifyError {
    fn from(msg: String) -> Self {
        TocifyError::Generic(msg)
    }
}

impl From<&str> for TocifyError {
    fn from(msg: &str) -> Self {
        TocifyError::Generic(msg.to_string())
    }
}
