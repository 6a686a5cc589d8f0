// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Tintlab.

use thiserror::Error;

/// Top-level error type for all Tintlab operations.
#[derive(Debug, Error)]
pub enum TintlabError {
    // -- Load failures (fatal before the session starts) --
    #[error("image not found: {0}")]
    NotFound(String),

    #[error("image loading failed: {0}")]
    ImageLoad(String),

    // -- User input (recoverable) --
    #[error("invalid selection: {0:?}")]
    InvalidSelection(String),

    #[error("invalid {field}: {input:?}")]
    InvalidNumericInput { field: String, input: String },

    // -- Collaborators --
    #[error("display failed: {0}")]
    Display(String),

    #[error("input unavailable: {0}")]
    Input(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TintlabError {
    /// Shorthand for an [`TintlabError::InvalidNumericInput`].
    pub fn invalid_number(field: impl Into<String>, input: impl Into<String>) -> Self {
        Self::InvalidNumericInput {
            field: field.into(),
            input: input.into(),
        }
    }

    /// Whether this error ends the session before any loop is entered.
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::ImageLoad(_))
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, TintlabError>;
