// errors.rs
use std::fmt;

/// Errors originating from the local estate store: opening the SQLite file,
/// running statements, or handing work to the write executor.
#[derive(Debug)]
pub enum StoreError {
    Open(String),
    Db(String),
    SchemaVersion { found: i64, supported: i64 },
    Encoding(String),
    Executor(String),
    Poisoned,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Open(msg) => write!(f, "Open DB failed: {msg}"),
            StoreError::Db(msg) => write!(f, "Database Error: {msg}"),
            StoreError::SchemaVersion { found, supported } => write!(
                f,
                "Unsupported schema version {found} (this build supports up to {supported})"
            ),
            StoreError::Encoding(msg) => write!(f, "Column encoding error: {msg}"),
            StoreError::Executor(msg) => write!(f, "Write executor error: {msg}"),
            StoreError::Poisoned => write!(f, "Connection lock poisoned"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Db(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Encoding(e.to_string())
    }
}

/// Errors raised while resolving runtime configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidVar { name: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidVar { name, reason } => {
                write!(f, "Invalid environment variable {name}: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
