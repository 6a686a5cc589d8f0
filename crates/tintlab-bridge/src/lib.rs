// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tintlab — Input and display bridges.
//
// The session only talks to the `InputProvider` and `Viewer` traits. The
// terminal and preview implementations back the real binary; the scripted
// ones (behind the `scripted` feature) let tests drive whole sessions without
// a tty.

pub mod preview;
#[cfg(any(test, feature = "scripted"))]
pub mod scripted;
pub mod terminal;
pub mod traits;

pub use preview::PreviewViewer;
#[cfg(any(test, feature = "scripted"))]
pub use scripted::{RecordingViewer, ScriptedInput};
pub use terminal::TerminalInput;
pub use traits::{InputProvider, Viewer};
