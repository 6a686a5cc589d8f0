// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tintlab — interactive colour filter and edge-detection session.
//
// Entry point. Initialises logging, loads the config, wires the terminal input
// and preview viewer into a session and runs it. Always exits with status 0.

mod services;
mod session;

use tintlab_bridge::{PreviewViewer, TerminalInput};
use tintlab_core::human_errors::humanize_error;

use services::{config_store, data_dir};

fn main() {
    // Logs go to stderr so they never interleave with prompts on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Tintlab starting");

    let data_dir = data_dir::data_dir();
    let config = config_store::load_config(&data_dir);
    tracing::info!(image = %config.image_path.display(), "Session configured");

    let preview_dir = config_store::preview_dir(&config, &data_dir);
    let viewer = match PreviewViewer::new(&preview_dir, config.open_viewer) {
        Ok(viewer) => viewer,
        Err(e) => {
            tracing::error!(dir = %preview_dir.display(), error = %e, "preview directory unusable");
            println!("{}", humanize_error(&e).message);
            return;
        }
    };

    match session::run(&config, TerminalInput::new(), viewer, std::io::stdout()) {
        Ok(outcome) => tracing::info!(?outcome, "Tintlab finished"),
        Err(e) => {
            tracing::error!(error = %e, "session aborted");
            println!("{}", humanize_error(&e).message);
        }
    }
}
