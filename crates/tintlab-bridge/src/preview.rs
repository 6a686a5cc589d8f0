// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Preview viewer — writes every shown image to `<dir>/<title-slug>.png` and can
// hand the file to the desktop's default image viewer.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use tintlab_core::error::{Result, TintlabError};
use tintlab_filter::ImageProcessor;
use tracing::{debug, info, warn};

use crate::traits::Viewer;

/// File-backed [`Viewer`].
///
/// Re-showing a title overwrites the same file, so an image viewer that watches
/// the file refreshes in place. The OS viewer is launched at most once per file.
pub struct PreviewViewer {
    dir: PathBuf,
    open_externally: bool,
    opened: HashSet<PathBuf>,
    last_shown: Option<PathBuf>,
}

impl PreviewViewer {
    /// Create a viewer writing into `dir`, creating it if needed.
    pub fn new(dir: impl Into<PathBuf>, open_externally: bool) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        debug!(dir = %dir.display(), open_externally, "Preview viewer ready");
        Ok(Self {
            dir,
            open_externally,
            opened: HashSet::new(),
            last_shown: None,
        })
    }

    /// Path of the most recently written preview.
    pub fn last_shown(&self) -> Option<&Path> {
        self.last_shown.as_deref()
    }

    /// File a title is written to.
    pub fn path_for(&self, title: &str) -> PathBuf {
        self.dir.join(format!("{}.png", slugify(title)))
    }
}

impl Viewer for PreviewViewer {
    fn show(&mut self, title: &str, image: &DynamicImage) -> Result<()> {
        let path = self.path_for(title);
        ImageProcessor::from_dynamic(image.clone()).save(&path)?;
        info!(title, path = %path.display(), "Preview written");

        if self.open_externally && self.opened.insert(path.clone()) {
            open::that_detached(&path).map_err(|e| {
                TintlabError::Display(format!("could not open {}: {e}", path.display()))
            })?;
        }
        self.last_shown = Some(path);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.last_shown.is_none() {
            warn!("Preview viewer closed without showing anything");
        }
        info!(dir = %self.dir.display(), "Preview viewer closed");
        self.opened.clear();
        Ok(())
    }
}

/// Lowercase ASCII alphanumerics; every other run of characters becomes one `-`.
fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("image");
    }
    slug
}
