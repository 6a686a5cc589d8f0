// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// tintlab-filter — Image transforms for the Tintlab filter session.
//
// Provides image loading (with a distinct not-found failure), per-channel colour
// filters with saturating arithmetic, and grayscale edge/blur operations backed
// by `imageproc`. Every transform is pure: it borrows its source and returns a
// new image.

pub mod color;
pub mod edges;
pub mod processor;

// Re-export the primary entry points so callers can use `tintlab_filter::apply_filter` etc.
pub use color::{apply_filter, apply_filter_with_step, apply_named};
pub use edges::apply_edge;
pub use processor::{ImageProcessor, load_image};
