// SPDX-License-Identifier: MIT

//! Error types for filedex

use thiserror::Error;

/// Result type alias for filedex operations
pub type Result<T> = std::result::Result<T, FiledexError>;

/// filedex error types
#[derive(Error, Debug)]
pub enum FiledexError {
    #[error("Usage error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}
