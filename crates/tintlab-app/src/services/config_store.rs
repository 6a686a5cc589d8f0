// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Config file lookup with fallback to defaults.

use std::path::{Path, PathBuf};

use tintlab_core::SessionConfig;
use tintlab_core::config::IMAGE_PATH_ENV;
use tracing::{info, warn};

use super::data_dir;

pub const CONFIG_FILE: &str = "tintlab.json";

/// Load the config from `dir` and apply the image path environment override.
pub fn load_config(dir: &Path) -> SessionConfig {
    load_config_file(dir).with_image_override(std::env::var(IMAGE_PATH_ENV).ok())
}

/// Load `tintlab.json` from `dir`, falling back to defaults when it is absent
/// or unreadable.
pub fn load_config_file(dir: &Path) -> SessionConfig {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        match SessionConfig::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "config unreadable — using defaults");
                SessionConfig::default()
            }
        }
    } else {
        info!(path = %path.display(), "no config file — using defaults");
        SessionConfig::default()
    }
}

/// Directory preview images are written to.
pub fn preview_dir(config: &SessionConfig, data_dir: &Path) -> PathBuf {
    match &config.preview_dir {
        Some(dir) => dir.clone(),
        None => data_dir::subdir(data_dir, "preview"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_file(dir.path());
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn damaged_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[1, 2").unwrap();
        let config = load_config_file(dir.path());
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn file_values_are_used() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{ "image_path": "portrait.png", "channel_step": 25 }"#,
        )
        .unwrap();
        let config = load_config_file(dir.path());
        assert_eq!(config.image_path, PathBuf::from("portrait.png"));
        assert_eq!(config.channel_step, 25);
    }

    #[test]
    fn explicit_preview_dir_wins() {
        let data = tempfile::tempdir().unwrap();
        let config = SessionConfig {
            preview_dir: Some(PathBuf::from("/srv/previews")),
            ..SessionConfig::default()
        };
        assert_eq!(preview_dir(&config, data.path()), PathBuf::from("/srv/previews"));

        let default_dir = preview_dir(&SessionConfig::default(), data.path());
        assert_eq!(default_dir, data.path().join("preview"));
        assert!(default_dir.is_dir());
    }
}
