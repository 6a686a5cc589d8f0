// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image processor — loading and saving a single in-memory image.

use std::path::Path;

use image::DynamicImage;
use tintlab_core::error::{Result, TintlabError};
use tracing::{info, instrument};

/// A single decoded image, opened from or saved to disk.
///
/// ```ignore
/// let source = ImageProcessor::open("example.jpg")?.into_dynamic();
/// ImageProcessor::from_dynamic(source.to_luma8().into()).save("gray.png")?;
/// ```
#[derive(Debug, Clone)]
pub struct ImageProcessor {
    image: DynamicImage,
}

impl ImageProcessor {
    // -- Construction ---------------------------------------------------------

    /// Load an image from a file path.
    ///
    /// A path that does not exist yields [`TintlabError::NotFound`]; a file that
    /// exists but cannot be decoded yields [`TintlabError::ImageLoad`].
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TintlabError::NotFound(path.display().to_string()));
        }
        let img = image::open(path).map_err(|err| {
            TintlabError::ImageLoad(format!("failed to open {}: {}", path.display(), err))
        })?;
        info!(width = img.width(), height = img.height(), "Image loaded");
        Ok(Self { image: img })
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    /// Consume the processor and return the underlying `DynamicImage`.
    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }

    // -- Output ---------------------------------------------------------------

    /// Write the image to a file. The format is inferred from the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.image.save(path.as_ref()).map_err(|err| {
            TintlabError::Display(format!(
                "failed to save image to {}: {}",
                path.as_ref().display(),
                err
            ))
        })
    }
}

/// Load the session's source image.
pub fn load_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    ImageProcessor::open(path).map(ImageProcessor::into_dynamic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgb, RgbImage};

    #[test]
    fn missing_path_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_image(dir.path().join("nope.jpg")).unwrap_err();
        assert!(matches!(err, TintlabError::NotFound(_)));
        assert!(err.is_load_failure());
    }

    #[test]
    fn undecodable_file_is_image_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, TintlabError::ImageLoad(_)));
    }

    #[test]
    fn saved_png_loads_back_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.png");
        let rgb = RgbImage::from_fn(4, 3, |x, y| Rgb([x as u8 * 60, y as u8 * 80, 7]));
        ImageProcessor::from_dynamic(DynamicImage::ImageRgb8(rgb.clone()))
            .save(&path)
            .unwrap();

        let loaded = ImageProcessor::open(&path).unwrap().into_dynamic();
        assert_eq!(loaded.dimensions(), (4, 3));
        assert_eq!(loaded.to_rgb8(), rgb);
    }
}
