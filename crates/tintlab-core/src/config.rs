// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Session configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::types::DEFAULT_INTENSITY;

/// Environment variable that overrides [`SessionConfig::image_path`].
pub const IMAGE_PATH_ENV: &str = "TINTLAB_IMAGE";

/// Persistent session settings. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Image loaded at startup.
    pub image_path: PathBuf,
    /// Intensity substituted when the increased-green prompt gets bad input.
    pub default_intensity: i32,
    /// Fixed step for increased red, decreased blue and decreased red.
    pub channel_step: i32,
    /// Where preview PNGs are written. `None` means `<data dir>/preview`.
    pub preview_dir: Option<PathBuf>,
    /// Ask the OS to open each preview in the default image viewer.
    pub open_viewer: bool,
    /// Title of the colour filter window.
    pub window_title: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            image_path: PathBuf::from("example.jpg"),
            default_intensity: DEFAULT_INTENSITY,
            channel_step: DEFAULT_INTENSITY,
            preview_dir: None,
            open_viewer: false,
            window_title: "Filtered Image".into(),
        }
    }
}

impl SessionConfig {
    /// Read a config from a JSON file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&data)?;
        debug!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    /// Write the config as pretty-printed JSON.
    pub fn persist_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Apply an image path override, typically from [`IMAGE_PATH_ENV`].
    pub fn with_image_override(mut self, image: Option<String>) -> Self {
        if let Some(path) = image.filter(|p| !p.trim().is_empty()) {
            self.image_path = PathBuf::from(path);
        }
        self
    }
}
