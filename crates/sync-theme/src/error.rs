use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("unknown theme {0:?} (expected light, dark or system)")]
    UnknownTheme(String),

    #[error("unknown color scheme {0:?} (expected light or dark)")]
    UnknownScheme(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference file is not a JSON object of strings: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type ThemeResult<T> = Result<T, ThemeError>;
