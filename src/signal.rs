// src/signal.rs

//! Provides signal handling for graceful shutdown.

use crate::cancellation::CancellationToken;
use anyhow::{Context, Result};

/// Sets up a handler for Ctrl+C (SIGINT, and SIGTERM via ctrlc's `termination` feature).
///
/// The returned token is cancelled when the signal arrives. A running
/// analysis or search notices it before the next file and stops with
/// `Error::Interrupted`.
///
/// # Errors
/// Returns an error if the signal handler cannot be set (for example, when
/// one has already been installed in this process).
pub fn setup_signal_handler() -> Result<CancellationToken> {
    let token = CancellationToken::new();
    let handler_token = token.clone();

    ctrlc::set_handler(move || {
        log::info!("Ctrl+C signal received, stopping the scan.");
        handler_token.cancel();
    })
    .context("Failed to set Ctrl+C signal handler")?;

    Ok(token)
}
