//! Task store error types.
//!
//! Uses miette for diagnostic output and thiserror for the derive macros.
//! The variants match what the boundaries need to distinguish: a missing
//! task maps to 404, a validation failure to 400.

use miette::Diagnostic;
use thiserror::Error;

/// Task store operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum StoreError {
    #[error("Task with id '{id}' not found")]
    #[diagnostic(code(taskdeck::store::not_found))]
    NotFound { id: String },

    #[error("{message}")]
    #[diagnostic(code(taskdeck::store::validation))]
    Validation { message: String },
}

impl StoreError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Result type for task store operations.
pub type StoreResult<T> = Result<T, StoreError>;
