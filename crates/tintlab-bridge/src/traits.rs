// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Trait definitions for the two collaborators a filter session needs: a source
// of user input and somewhere to show images.

use image::DynamicImage;
use tintlab_core::error::Result;
use tintlab_core::types::KeyPress;

/// Blocking source of user input.
///
/// `Ok(None)` from either method means input has ended (EOF, Ctrl+C); the
/// session treats it like a quit.
pub trait InputProvider {
    /// Block until a single key is pressed.
    fn read_key(&mut self) -> Result<Option<KeyPress>>;

    /// Show `prompt` and block until a full line is entered. The trailing
    /// newline is stripped.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Somewhere to render images.
pub trait Viewer {
    /// Display `image` under `title`, replacing anything previously shown
    /// under the same title.
    fn show(&mut self, title: &str, image: &DynamicImage) -> Result<()>;

    /// Release display resources. Called once when a loop exits.
    fn close(&mut self) -> Result<()>;
}

impl<T: InputProvider + ?Sized> InputProvider for &mut T {
    fn read_key(&mut self) -> Result<Option<KeyPress>> {
        (**self).read_key()
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        (**self).read_line(prompt)
    }
}

impl<T: Viewer + ?Sized> Viewer for &mut T {
    fn show(&mut self, title: &str, image: &DynamicImage) -> Result<()> {
        (**self).show(title, image)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}
