use std::path::PathBuf;

/// Custom error type for the linkvault library
///
/// Every failure path of the library resolves to one of these variants. The
/// CLI turns them into a one-line notice; none of them are fatal to the
/// in-memory collection.
#[derive(Debug, thiserror::Error)]
pub enum LinkVaultError {
    /// Storage backend errors (SQLite)
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// I/O errors (file reads for import, export writes)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// URL rejected at add/edit time
    #[error("Please enter a valid URL (must start with http:// or https://): {0}")]
    InvalidUrl(String),

    /// Link not found
    #[error("Link with ID {0} not found")]
    LinkNotFound(String),

    /// Export requested on an empty collection
    #[error("No links to export.")]
    NothingToExport,

    /// Invalid input or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A file to import could not be read
    #[error("Error reading file {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An export could not be written
    #[error("Error writing file {}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Browser launch errors
    #[error("Browser error: {0}")]
    Browser(String),

    /// YAML parsing/serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// JSON errors
    #[error("JSON error: {0}")]
    Json(String),
}

/// Result type alias using LinkVaultError
pub type Result<T> = std::result::Result<T, LinkVaultError>;

impl From<serde_yaml::Error> for LinkVaultError {
    fn from(err: serde_yaml::Error) -> Self {
        LinkVaultError::Yaml(err.to_string())
    }
}

impl From<serde_json::Error> for LinkVaultError {
    fn from(err: serde_json::Error) -> Self {
        LinkVaultError::Json(err.to_string())
    }
}
