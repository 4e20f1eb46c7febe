//! Error types for the record store and its configuration.
//!
//! [`HabitusError`] is what stores and builders return. The query engine never
//! lets one of these escape: it converts them into an
//! [`engine::Failure`](crate::engine::Failure) at its own boundary.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::ItemId;

/// Error type for store and configuration operations.
#[derive(Error, Debug)]
pub enum HabitusError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Item not found for the given ID
    #[error("Item with ID {id} not found")]
    ItemNotFound { id: ItemId },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// Failure injected into an in-memory store
    #[error("Simulated store failure: {message}")]
    Simulated { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> HabitusError {
        HabitusError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> HabitusError {
        HabitusError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl HabitusError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Returns true when the error means the store could not find the item.
    pub fn is_not_found(&self) -> bool {
        matches!(self, HabitusError::ItemNotFound { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| HabitusError::database(message).with_source(e))
    }
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, HabitusError>;
