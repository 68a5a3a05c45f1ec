use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Associate name must not be empty")]
    EmptyName,

    #[error("No associate is open")]
    NoAssociate,

    #[error("Expected {expected} row values, got {actual}")]
    RowLength { expected: usize, actual: usize },

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("Chart error: {0}")]
    Chart(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
