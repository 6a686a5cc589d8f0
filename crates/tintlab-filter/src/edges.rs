// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Edge detection and smoothing on grayscale images — Sobel gradient magnitude,
// Canny, Laplacian, Gaussian blur and median filtering — plus parsing of the
// numeric parameters typed at the menu.

use image::{GrayImage, ImageBuffer, Luma};
use imageproc::edges::canny;
use imageproc::filter::{gaussian_blur_f32, laplacian_filter, median_filter};
use imageproc::gradients::sobel_gradients;
use tintlab_core::error::{Result, TintlabError};
use tintlab_core::types::EdgeOperation;
use tracing::{debug, info, instrument};

/// Largest accepted blur kernel. Bigger kernels are rejected as invalid input.
pub const MAX_KERNEL: u32 = 255;

/// Largest meaningful Canny threshold for 8-bit gradients. Bigger thresholds
/// are rejected as invalid input.
pub const MAX_THRESHOLD: f32 = 1140.0;

/// Run one edge operation, returning a new grayscale image.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn apply_edge(image: &GrayImage, op: EdgeOperation) -> GrayImage {
    info!(title = op.title(), "Applying edge operation");
    match op {
        EdgeOperation::Sobel => sobel_magnitude(image),
        EdgeOperation::Canny { low, high } => canny(image, low, high),
        EdgeOperation::Laplacian => laplacian_magnitude(image),
        EdgeOperation::GaussianBlur { kernel } => {
            let sigma = gaussian_sigma(kernel);
            debug!(kernel, sigma, "Gaussian sigma derived from kernel size");
            gaussian_blur_f32(image, sigma)
        }
        EdgeOperation::MedianBlur { kernel } => {
            let radius = kernel / 2;
            median_filter(image, radius, radius)
        }
    }
}

/// Sobel gradient magnitude, clamped into 8 bits.
fn sobel_magnitude(image: &GrayImage) -> GrayImage {
    let gradients = sobel_gradients(image);
    ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
        let Luma([magnitude]) = *gradients.get_pixel(x, y);
        Luma([magnitude.min(255) as u8])
    })
}

/// Absolute Laplacian response, clamped into 8 bits.
fn laplacian_magnitude(image: &GrayImage) -> GrayImage {
    let response = laplacian_filter(image);
    ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
        let Luma([value]) = *response.get_pixel(x, y);
        Luma([value.unsigned_abs().min(255) as u8])
    })
}

/// Standard deviation for a square Gaussian kernel of side `kernel`, using the
/// usual `0.3 * ((k - 1) * 0.5 - 1) + 0.8` rule.
pub fn gaussian_sigma(kernel: u32) -> f32 {
    0.3 * ((kernel as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

// -- Parameter parsing --------------------------------------------------------

/// Parse a blur kernel size. Must be a positive odd integer no larger than
/// [`MAX_KERNEL`].
pub fn parse_kernel(input: &str) -> Result<u32> {
    let invalid = || TintlabError::invalid_number("kernel size", input.trim());
    let kernel: u32 = input.trim().parse().map_err(|_| invalid())?;
    if kernel == 0 || kernel % 2 == 0 || kernel > MAX_KERNEL {
        return Err(invalid());
    }
    Ok(kernel)
}

/// Parse one Canny threshold: a non-negative integer no larger than
/// [`MAX_THRESHOLD`].
pub fn parse_threshold(input: &str) -> Result<f32> {
    let invalid = || TintlabError::invalid_number("threshold values", input.trim());
    let value: i64 = input.trim().parse().map_err(|_| invalid())?;
    if value < 0 || value as f32 > MAX_THRESHOLD {
        return Err(invalid());
    }
    Ok(value as f32)
}

/// Build a Canny operation from already-parsed thresholds; `low` must not
/// exceed `high`.
pub fn canny_thresholds(low: f32, high: f32) -> Result<EdgeOperation> {
    if low > high {
        return Err(TintlabError::invalid_number(
            "threshold values",
            format!("{low} > {high}"),
        ));
    }
    Ok(EdgeOperation::Canny { low, high })
}

/// Parse both Canny thresholds at once.
pub fn parse_thresholds(low: &str, high: &str) -> Result<EdgeOperation> {
    canny_thresholds(parse_threshold(low)?, parse_threshold(high)?)
}
