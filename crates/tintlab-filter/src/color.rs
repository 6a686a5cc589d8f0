// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Colour filters — channel tints and saturating per-channel adjustments.

use image::RgbImage;
use tintlab_core::types::{Channel, ColorFilter, DEFAULT_INTENSITY};
use tracing::{debug, instrument, warn};

/// Apply a colour filter using the default step of 50 for the fixed
/// increase/decrease filters.
pub fn apply_filter(image: &RgbImage, filter: ColorFilter) -> RgbImage {
    apply_filter_with_step(image, filter, DEFAULT_INTENSITY)
}

/// Apply a colour filter, returning a new image. `step` is the magnitude used
/// by increased red, decreased blue and decreased red; increased green carries
/// its own amount.
#[instrument(skip(image, filter), fields(filter = %filter, width = image.width(), height = image.height()))]
pub fn apply_filter_with_step(image: &RgbImage, filter: ColorFilter, step: i32) -> RgbImage {
    match filter {
        ColorFilter::Original => image.clone(),
        ColorFilter::RedTint => tint(image, Channel::Red),
        ColorFilter::GreenTint => tint(image, Channel::Green),
        ColorFilter::BlueTint => tint(image, Channel::Blue),
        ColorFilter::IncreasedRed => adjust_channel(image, Channel::Red, step),
        ColorFilter::IncreasedGreen { amount } => adjust_channel(image, Channel::Green, amount),
        ColorFilter::DecreasedBlue => adjust_channel(image, Channel::Blue, step.saturating_neg()),
        ColorFilter::DecreasedRed => adjust_channel(image, Channel::Red, step.saturating_neg()),
    }
}

/// Apply a filter by name. Unknown names return the image unchanged.
pub fn apply_named(image: &RgbImage, name: &str) -> RgbImage {
    match name.parse::<ColorFilter>() {
        Ok(filter) => apply_filter(image, filter),
        Err(_) => {
            warn!(name, "Unknown filter name; returning image unchanged");
            image.clone()
        }
    }
}

/// Zero every channel except `keep`.
pub fn tint(image: &RgbImage, keep: Channel) -> RgbImage {
    let keep = keep.index();
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        for (i, value) in pixel.0.iter_mut().enumerate() {
            if i != keep {
                *value = 0;
            }
        }
    }
    out
}

/// Add `delta` to one channel, clamping to [0, 255].
pub fn adjust_channel(image: &RgbImage, channel: Channel, delta: i32) -> RgbImage {
    debug!(?channel, delta, "Adjusting channel");
    let idx = channel.index();
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        pixel.0[idx] = saturating_offset(pixel.0[idx], delta);
    }
    out
}

fn saturating_offset(value: u8, delta: i32) -> u8 {
    (value as i32).saturating_add(delta).clamp(0, 255) as u8
}
