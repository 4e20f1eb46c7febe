//! Failures reported by the query engine.

use thiserror::Error;

use crate::error::HabitusError;

/// The three categories of engine failure. None of them is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// User input was rejected before touching the store
    Validation,
    /// The store could not be queried
    StoreRead,
    /// The store could not persist a change
    StoreWrite,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Validation => "validation",
            FailureKind::StoreRead => "store read",
            FailureKind::StoreWrite => "store write",
        }
    }
}

/// A user-facing failure: what went wrong, in words fit for an alert.
///
/// This is the only error type that leaves the engine. Store errors are
/// rendered into the message so callers never see a raw [`HabitusError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Validation,
            message: message.into(),
        }
    }

    /// A failed query, described as `"<context>: <store error>"`.
    pub fn store_read(context: &str, error: &HabitusError) -> Self {
        Self {
            kind: FailureKind::StoreRead,
            message: format!("{context}: {error}"),
        }
    }

    /// A failed write, described as `"<context>: <store error>"`.
    pub fn store_write(context: &str, error: &HabitusError) -> Self {
        Self {
            kind: FailureKind::StoreWrite,
            message: format!("{context}: {error}"),
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind == FailureKind::Validation
    }
}
