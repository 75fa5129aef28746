//! # Students - student record store
//!
//! A small CRUD layer over a single SQLite table.
//!
//! Students provides:
//! - `Student` records and `StudentFields` for the caller-supplied columns
//! - A SQLite-backed `StudentStore` with add, list, update and delete
//! - Positional argument coercion for the command-line front end
//! - Optional `students.toml` configuration and themed terminal output

pub mod student;
pub mod storage;
pub mod args;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use student::{Student, StudentFields};
pub use storage::StudentStore;

/// Result type alias for student store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for student store operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("{0}")]
    Usage(String),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

