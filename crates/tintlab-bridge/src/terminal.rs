// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Terminal input: single keys through crossterm raw mode, lines through stdin.

use std::io::{self, BufRead, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::tty::IsTty;
use tintlab_core::error::{Result, TintlabError};
use tintlab_core::types::KeyPress;
use tracing::debug;

use crate::traits::InputProvider;

/// Reads keys and lines from the controlling terminal.
///
/// When stdin is not a tty (piped input), keys fall back to the first
/// character of each line.
pub struct TerminalInput {
    raw_keys: bool,
}

impl TerminalInput {
    pub fn new() -> Self {
        let raw_keys = io::stdin().is_tty();
        debug!(raw_keys, "Terminal input initialised");
        Self { raw_keys }
    }

    fn read_raw_key(&self) -> Result<Option<KeyPress>> {
        enable_raw_mode().map_err(|e| TintlabError::Input(format!("raw mode: {e}")))?;
        let key = next_key_press();
        // Cooked mode must come back even when the read failed.
        let restored = disable_raw_mode();
        let key = key?;
        restored.map_err(|e| TintlabError::Input(format!("restoring terminal: {e}")))?;

        if let Some(press) = &key {
            println!("{press}");
        }
        Ok(key)
    }

    fn read_piped_key(&self) -> Result<Option<KeyPress>> {
        Ok(read_stdin_line()?.map(|line| match line.trim().chars().next() {
            Some(c) => KeyPress::Char(c),
            None => KeyPress::Other("Enter".into()),
        }))
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputProvider for TerminalInput {
    fn read_key(&mut self) -> Result<Option<KeyPress>> {
        if self.raw_keys {
            self.read_raw_key()
        } else {
            self.read_piped_key()
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;
        read_stdin_line()
    }
}

/// Block until a key press arrives. Ctrl+C ends input.
fn next_key_press() -> Result<Option<KeyPress>> {
    loop {
        let ev = event::read().map_err(|e| TintlabError::Input(format!("key read: {e}")))?;
        let Event::Key(key) = ev else { continue };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(None);
        }
        let press = match key.code {
            KeyCode::Char(c) => KeyPress::Char(c),
            other => KeyPress::Other(format!("{other:?}")),
        };
        return Ok(Some(press));
    }
}

fn read_stdin_line() -> Result<Option<String>> {
    let mut buf = String::new();
    let read = io::stdin().lock().read_line(&mut buf)?;
    if read == 0 {
        return Ok(None);
    }
    let trimmed = buf.trim_end_matches(['\r', '\n']).len();
    buf.truncate(trimmed);
    Ok(Some(buf))
}
