use thiserror::Error;

/// Main error type for deck generation.
#[derive(Error, Debug)]
pub enum DeckError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP container or part naming error
    #[error("Package error: {0}")]
    Package(String),

    /// XML serialization error
    #[error("XML error: {0}")]
    XmlError(String),

    /// Invalid file format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// An input the layout needs is absent or unusable
    #[error("Missing resource: {0}")]
    MissingResource(String),
}

/// Result type for deck generation.
pub type Result<T> = std::result::Result<T, DeckError>;
