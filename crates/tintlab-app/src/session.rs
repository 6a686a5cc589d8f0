// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Interactive filter session — mode selection, the colour filter key loop and
// the edge-detection menu loop.
//
// The session owns the source image and the current selection. What is shown
// is always recomputed from the untouched source, so the displayed image is a
// pure function of (source, selection).

use std::io::Write;

use image::{DynamicImage, GrayImage, RgbImage};
use tintlab_bridge::{InputProvider, Viewer};
use tintlab_core::error::{Result, TintlabError};
use tintlab_core::human_errors::{Recovery, humanize_error};
use tintlab_core::SessionConfig;
use tintlab_core::types::{
    ColorFilter, EdgeOperation, KEY_TABLE, KeyAction, KeyPress, Mode, key_action,
};
use tintlab_filter::edges::{canny_thresholds, parse_kernel, parse_threshold};
use tintlab_filter::{apply_edge, apply_filter_with_step, load_image};
use tracing::{error, info, instrument, warn};

const MODE_MENU: &str = "\
Choose one of the following modes:
1 - Apply Color Filter to Image
2 - Edge Detection Filters";

const EDGE_MENU: &str = "
Choose an edge detection method:
1. Sobel Edge Detection
2. Canny Edge Detection
3. Laplacian Edge Detection
4. Gaussian Blur
5. Median Filtering
6. Exit";

const CHOICE_PROMPT: &str = "Enter your choice: ";
const INTENSITY_PROMPT: &str = "Enter the green intensity to increase: ";
const KERNEL_PROMPT: &str = "Kernel size (odd number): ";

/// How a call to [`run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The mode menu got something other than 1 or 2.
    InvalidMode,
    /// The image could not be loaded; no loop was entered.
    LoadFailed,
    /// A loop ran and ended on quit or end of input.
    Completed,
}

/// Entry point: choose a mode, load the image, run the matching loop.
pub fn run<I, V, W>(
    config: &SessionConfig,
    mut input: I,
    viewer: V,
    mut out: W,
) -> Result<Outcome>
where
    I: InputProvider,
    V: Viewer,
    W: Write,
{
    let Some(mode) = select_mode(&mut input, &mut out)? else {
        return Ok(Outcome::InvalidMode);
    };

    let source = match load_image(&config.image_path) {
        Ok(image) => image,
        Err(e) if e.is_load_failure() => {
            error!(path = %config.image_path.display(), error = %e, "Image load failed");
            writeln!(out, "{}", humanize_error(&e).message)?;
            return Ok(Outcome::LoadFailed);
        }
        Err(e) => return Err(e),
    };

    let mut session = Session::new(source, config.clone(), input, viewer, out);
    match mode {
        Mode::ColorFilter => session.run_color_filter_loop()?,
        Mode::EdgeDetection => session.run_edge_detection_loop()?,
    }
    Ok(Outcome::Completed)
}

/// Show the mode menu and read one choice. Anything other than 1 or 2 is
/// reported and yields `None`; end of input also yields `None`.
pub fn select_mode<I, W>(input: &mut I, out: &mut W) -> Result<Option<Mode>>
where
    I: InputProvider,
    W: Write,
{
    writeln!(out, "{MODE_MENU}")?;
    let Some(line) = input.read_line(CHOICE_PROMPT)? else {
        info!("Input ended at mode selection");
        return Ok(None);
    };
    match line.parse::<Mode>() {
        Ok(mode) => {
            info!(?mode, "Mode selected");
            Ok(Some(mode))
        }
        Err(e) => {
            warn!(error = %e, "Unrecognised mode");
            writeln!(out, "Invalid choice.")?;
            Ok(None)
        }
    }
}

/// A loaded image plus the current filter selection and the collaborators
/// used to read input and show results.
pub struct Session<I, V, W> {
    source: DynamicImage,
    selection: ColorFilter,
    config: SessionConfig,
    input: I,
    viewer: V,
    out: W,
}

impl<I, V, W> Session<I, V, W>
where
    I: InputProvider,
    V: Viewer,
    W: Write,
{
    pub fn new(source: DynamicImage, config: SessionConfig, input: I, viewer: V, out: W) -> Self {
        Self {
            source,
            selection: ColorFilter::default(),
            config,
            input,
            viewer,
            out,
        }
    }

    pub fn selection(&self) -> ColorFilter {
        self.selection
    }

    pub fn source(&self) -> &DynamicImage {
        &self.source
    }

    /// The colour image for the current selection.
    pub fn displayed(&self) -> RgbImage {
        apply_filter_with_step(&self.source.to_rgb8(), self.selection, self.config.channel_step)
    }

    // -- Colour filter loop ---------------------------------------------------

    /// Show the filtered image, read a key, update the selection; repeat until
    /// `q` or end of input. The viewer is closed on every exit path.
    #[instrument(skip(self))]
    pub fn run_color_filter_loop(&mut self) -> Result<()> {
        let result = self.color_filter_loop();
        let closed = self.viewer.close();
        result.and(closed)
    }

    fn color_filter_loop(&mut self) -> Result<()> {
        writeln!(self.out, "\nPress keys to apply filters:")?;
        for (key, _, label) in KEY_TABLE {
            writeln!(self.out, "{key} - {label}")?;
        }

        loop {
            let filtered = self.displayed();
            let title = self.config.window_title.clone();
            self.show(&title, DynamicImage::ImageRgb8(filtered))?;

            let Some(key) = self.input.read_key()? else {
                info!("Input ended; leaving colour filter mode");
                return Ok(());
            };

            let action = match &key {
                KeyPress::Char(c) => key_action(*c),
                KeyPress::Other(_) => None,
            };
            match action {
                Some(KeyAction::Select(filter)) => self.selection = filter,
                Some(KeyAction::PromptGreen) => {
                    let Some(amount) = self.prompt_intensity()? else {
                        info!("Input ended at the intensity prompt");
                        return Ok(());
                    };
                    self.selection = ColorFilter::IncreasedGreen { amount };
                }
                Some(KeyAction::Quit) => {
                    writeln!(self.out, "Exiting color filter mode...")?;
                    return Ok(());
                }
                None => {
                    warn!(%key, "Unrecognised key");
                    writeln!(self.out, "Invalid key pressed.")?;
                    continue;
                }
            }
            info!(selection = %self.selection(), "Filter selected");
        }
    }

    /// Ask for the green increase. Anything that is not an integer falls back
    /// to the configured default; `None` means input ended.
    fn prompt_intensity(&mut self) -> Result<Option<i32>> {
        let default = self.config.default_intensity;
        let Some(line) = self.input.read_line(INTENSITY_PROMPT)? else {
            return Ok(None);
        };
        match line.trim().parse::<i32>() {
            Ok(amount) => Ok(Some(amount)),
            Err(_) => {
                warn!(input = %line.trim(), default, "Invalid intensity; using default");
                writeln!(self.out, "Invalid input. Using default intensity of {default}.")?;
                Ok(Some(default))
            }
        }
    }

    // -- Edge detection loop --------------------------------------------------

    /// Show the grayscale image, then serve the numbered menu until 6 or end
    /// of input. The viewer is closed on every exit path.
    #[instrument(skip(self))]
    pub fn run_edge_detection_loop(&mut self) -> Result<()> {
        let result = self.edge_detection_loop();
        let closed = self.viewer.close();
        result.and(closed)
    }

    fn edge_detection_loop(&mut self) -> Result<()> {
        let gray: GrayImage = self.source().to_luma8();
        self.show("Grayscale Image", DynamicImage::ImageLuma8(gray.clone()))?;

        loop {
            writeln!(self.out, "{EDGE_MENU}")?;
            let Some(choice) = self.input.read_line(CHOICE_PROMPT)? else {
                info!("Input ended; leaving edge detection");
                return Ok(());
            };

            let op = match choice.trim() {
                "1" => Ok(Some(EdgeOperation::Sobel)),
                "2" => self.prompt_canny(),
                "3" => Ok(Some(EdgeOperation::Laplacian)),
                "4" => self
                    .prompt_kernel()
                    .map(|k| k.map(|kernel| EdgeOperation::GaussianBlur { kernel })),
                "5" => self
                    .prompt_kernel()
                    .map(|k| k.map(|kernel| EdgeOperation::MedianBlur { kernel })),
                "6" => {
                    writeln!(self.out, "Exiting edge detection...")?;
                    return Ok(());
                }
                other => Err(TintlabError::InvalidSelection(other.to_string())),
            };

            match op {
                Ok(Some(op)) => {
                    let result = apply_edge(&gray, op);
                    self.show(op.title(), DynamicImage::ImageLuma8(result))?;
                }
                Ok(None) => {
                    info!("Input ended at a parameter prompt");
                    return Ok(());
                }
                Err(e) => self.recover(e)?,
            }
        }
    }

    /// Read low then high threshold. A bad low value skips the high prompt.
    fn prompt_canny(&mut self) -> Result<Option<EdgeOperation>> {
        let Some(low) = self.input.read_line("Low threshold: ")? else {
            return Ok(None);
        };
        let low = parse_threshold(&low)?;
        let Some(high) = self.input.read_line("High threshold: ")? else {
            return Ok(None);
        };
        let high = parse_threshold(&high)?;
        canny_thresholds(low, high).map(Some)
    }

    fn prompt_kernel(&mut self) -> Result<Option<u32>> {
        match self.input.read_line(KERNEL_PROMPT)? {
            Some(line) => parse_kernel(&line).map(Some),
            None => Ok(None),
        }
    }

    // -- Shared helpers -------------------------------------------------------

    /// Show an image. A failure the loop can survive is reported and the loop
    /// carries on; anything else ends it.
    fn show(&mut self, title: &str, image: DynamicImage) -> Result<()> {
        if let Err(e) = self.viewer.show(title, &image) {
            error!(title, error = %e, "Display failed");
            self.recover(e)?;
        }
        Ok(())
    }

    /// Print the plain-language message for `err`, then hand it back if it
    /// ends the session.
    fn recover(&mut self, err: TintlabError) -> Result<()> {
        let human = humanize_error(&err);
        writeln!(self.out, "{}", human.message)?;
        match human.recovery {
            Recovery::Continue => {
                warn!(error = %err, "Recoverable error");
                Ok(())
            }
            Recovery::Terminate => {
                error!(error = %err, "Unrecoverable error; leaving loop");
                Err(err)
            }
        }
    }
}
