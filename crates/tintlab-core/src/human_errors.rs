// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Plain-language messages printed to the user for each error, plus whether the
// session can carry on after it.

use crate::error::TintlabError;

/// What the session does after reporting an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// Stop before entering any loop.
    Terminate,
    /// Report and keep looping with the previous state.
    Continue,
}

/// A user-facing line of text and the recovery it implies.
#[derive(Debug, Clone)]
pub struct HumanError {
    pub message: String,
    pub recovery: Recovery,
}

/// Convert a `TintlabError` into the line shown at the prompt.
pub fn humanize_error(err: &TintlabError) -> HumanError {
    match err {
        TintlabError::NotFound(path) => HumanError {
            message: format!("Error: Could not load image. ({path} does not exist)"),
            recovery: Recovery::Terminate,
        },

        TintlabError::ImageLoad(_) => HumanError {
            message: "Error: Could not load image.".into(),
            recovery: Recovery::Terminate,
        },

        TintlabError::InvalidSelection(_) => HumanError {
            message: "Invalid choice. Try again.".into(),
            recovery: Recovery::Continue,
        },

        TintlabError::InvalidNumericInput { field, .. } => HumanError {
            message: format!("Invalid {field}."),
            recovery: Recovery::Continue,
        },

        TintlabError::Display(detail) => HumanError {
            message: format!("Could not show the image ({detail})."),
            recovery: Recovery::Continue,
        },

        TintlabError::Input(detail) => HumanError {
            message: format!("Could not read input ({detail})."),
            recovery: Recovery::Terminate,
        },

        TintlabError::Io(e) => HumanError {
            message: format!("File error: {e}"),
            recovery: Recovery::Terminate,
        },

        TintlabError::Serialization(e) => HumanError {
            message: format!("Settings file is damaged: {e}"),
            recovery: Recovery::Continue,
        },
    }
}
