// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for workout logging.

/// Validation failure for raw workout form input.
///
/// Each variant names the offending field, so the UI can report more than
/// the blanket "inputs have to be positive numbers" message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must be a positive number")]
    NotPositive { field: &'static str },
}

impl ValidationError {
    /// Name of the form field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NotFinite { field } => field,
            ValidationError::NotPositive { field } => field,
        }
    }
}
