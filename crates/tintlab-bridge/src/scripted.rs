// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scripted bridges for tests and headless runs.
//
// `ScriptedInput` replays a fixed sequence of keys and lines and then reports
// end of input. `RecordingViewer` keeps every shown image in memory.

use std::collections::VecDeque;

use image::DynamicImage;
use tintlab_core::error::Result;
use tintlab_core::types::KeyPress;
use tracing::debug;

use crate::traits::{InputProvider, Viewer};

/// Replays pre-recorded input.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    keys: VecDeque<KeyPress>,
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one key per character of `keys`.
    pub fn with_keys(mut self, keys: &str) -> Self {
        self.keys.extend(keys.chars().map(KeyPress::Char));
        self
    }

    /// Queue a non-character key such as `"Esc"`.
    pub fn with_key(mut self, key: KeyPress) -> Self {
        self.keys.push_back(key);
        self
    }

    /// Queue lines answered in order by `read_line`.
    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Every prompt passed to `read_line`, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Keys and lines not yet consumed.
    pub fn remaining(&self) -> (usize, usize) {
        (self.keys.len(), self.lines.len())
    }
}

impl InputProvider for ScriptedInput {
    fn read_key(&mut self) -> Result<Option<KeyPress>> {
        let key = self.keys.pop_front();
        debug!(?key, "Scripted key");
        Ok(key)
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }
}

/// Keeps every `show` call in memory.
#[derive(Debug, Default)]
pub struct RecordingViewer {
    shown: Vec<(String, DynamicImage)>,
    close_count: usize,
}

impl RecordingViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `(title, image)` shown so far.
    pub fn shown(&self) -> &[(String, DynamicImage)] {
        &self.shown
    }

    pub fn titles(&self) -> Vec<&str> {
        self.shown.iter().map(|(t, _)| t.as_str()).collect()
    }

    pub fn last(&self) -> Option<&DynamicImage> {
        self.shown.last().map(|(_, img)| img)
    }

    pub fn close_count(&self) -> usize {
        self.close_count
    }
}

impl Viewer for RecordingViewer {
    fn show(&mut self, title: &str, image: &DynamicImage) -> Result<()> {
        self.shown.push((title.to_string(), image.clone()));
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.close_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn scripted_input_replays_then_ends() {
        let mut input = ScriptedInput::new()
            .with_keys("rq")
            .with_lines(["1", "abc"]);

        assert_eq!(input.read_key().unwrap(), Some(KeyPress::Char('r')));
        assert_eq!(input.read_key().unwrap(), Some(KeyPress::Char('q')));
        assert_eq!(input.read_key().unwrap(), None);

        assert_eq!(input.read_line("first: ").unwrap().as_deref(), Some("1"));
        assert_eq!(input.read_line("second: ").unwrap().as_deref(), Some("abc"));
        assert_eq!(input.read_line("third: ").unwrap(), None);
        assert_eq!(input.prompts(), ["first: ", "second: ", "third: "]);
    }

    #[test]
    fn recording_viewer_keeps_order() {
        let mut viewer = RecordingViewer::new();
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(1, 1, Luma([9])));
        viewer.show("a", &img).unwrap();
        viewer.show("b", &img).unwrap();
        viewer.close().unwrap();

        assert_eq!(viewer.titles(), ["a", "b"]);
        assert_eq!(viewer.close_count(), 1);
        assert_eq!(viewer.last(), Some(&img));
    }
}
