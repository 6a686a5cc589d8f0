// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shared domain types: colour filters, edge operations, session modes and the
// static key table that maps keyboard input onto filters.

use std::fmt;
use std::str::FromStr;

use crate::error::TintlabError;

/// Default magnitude for channel increases and decreases.
pub const DEFAULT_INTENSITY: i32 = 50;

/// One channel of an RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Index of the channel within an `Rgb<u8>` pixel.
    pub fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }
}

/// The active colour transform of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorFilter {
    /// Identity.
    #[default]
    Original,
    RedTint,
    GreenTint,
    BlueTint,
    IncreasedRed,
    /// Increase green by an amount chosen when the filter is selected.
    IncreasedGreen { amount: i32 },
    DecreasedBlue,
    DecreasedRed,
}

impl ColorFilter {
    /// Canonical snake_case name, as used in config files and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::RedTint => "red_tint",
            Self::GreenTint => "green_tint",
            Self::BlueTint => "blue_tint",
            Self::IncreasedRed => "increased_red",
            Self::IncreasedGreen { .. } => "increased_green",
            Self::DecreasedBlue => "decreased_blue",
            Self::DecreasedRed => "decreased_red",
        }
    }
}

impl fmt::Display for ColorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncreasedGreen { amount } => write!(f, "increased_green(+{amount})"),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for ColorFilter {
    type Err = TintlabError;

    /// Accepts both `"increased red"` and `"increased_red"` spellings.
    /// `increased_green` parses with the default intensity.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        let filter = match normalised.as_str() {
            "original" => Self::Original,
            "red_tint" => Self::RedTint,
            "green_tint" => Self::GreenTint,
            "blue_tint" => Self::BlueTint,
            "increased_red" => Self::IncreasedRed,
            "increased_green" => Self::IncreasedGreen {
                amount: DEFAULT_INTENSITY,
            },
            "decreased_blue" => Self::DecreasedBlue,
            "decreased_red" => Self::DecreasedRed,
            _ => return Err(TintlabError::InvalidSelection(s.to_string())),
        };
        Ok(filter)
    }
}

/// What a single key press asks the colour loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Switch to a filter that needs no further input.
    Select(ColorFilter),
    /// Switch to increased green; the amount is prompted for.
    PromptGreen,
    Quit,
}

/// Static key table for the colour filter loop.
///
/// `d` and `x` both map to decreased blue so either muscle memory works.
pub const KEY_TABLE: &[(char, KeyAction, &str)] = &[
    ('r', KeyAction::Select(ColorFilter::RedTint), "Red Tint"),
    ('b', KeyAction::Select(ColorFilter::BlueTint), "Blue Tint"),
    ('g', KeyAction::Select(ColorFilter::GreenTint), "Green Tint"),
    ('i', KeyAction::Select(ColorFilter::IncreasedRed), "Increased Red"),
    ('f', KeyAction::PromptGreen, "Increased Green"),
    ('x', KeyAction::Select(ColorFilter::DecreasedBlue), "Decreased Blue"),
    ('d', KeyAction::Select(ColorFilter::DecreasedBlue), "Decreased Blue"),
    ('y', KeyAction::Select(ColorFilter::DecreasedRed), "Decreased Red"),
    ('o', KeyAction::Select(ColorFilter::Original), "Original Image"),
    ('q', KeyAction::Quit, "Quit"),
];

/// Look up a key in [`KEY_TABLE`].
pub fn key_action(key: char) -> Option<KeyAction> {
    KEY_TABLE
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, action, _)| *action)
}

/// A key read from the user. Non-character keys are kept by name so they can
/// be reported back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPress {
    Char(char),
    Other(String),
}

impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{c}"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// An edge-detection menu entry with its resolved parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeOperation {
    /// Sobel gradient magnitude.
    Sobel,
    /// Canny hysteresis thresholding.
    Canny { low: f32, high: f32 },
    /// Absolute second derivative.
    Laplacian,
    GaussianBlur { kernel: u32 },
    MedianBlur { kernel: u32 },
}

impl EdgeOperation {
    /// Window title used when the result is shown.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Sobel => "Sobel Edge Detection",
            Self::Canny { .. } => "Canny Edge Detection",
            Self::Laplacian => "Laplacian Edge Detection",
            Self::GaussianBlur { .. } => "Gaussian Blur",
            Self::MedianBlur { .. } => "Median Filtered Image",
        }
    }
}

/// Top-level session mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    ColorFilter,
    EdgeDetection,
}

impl FromStr for Mode {
    type Err = TintlabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::ColorFilter),
            "2" => Ok(Self::EdgeDetection),
            other => Err(TintlabError::InvalidSelection(other.to_string())),
        }
    }
}
