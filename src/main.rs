// src/main.rs

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufWriter};
use storage_tools::cli::Cli;
use storage_tools::errors::Error;
use storage_tools::signal::setup_signal_handler;
use storage_tools::{run, Config};

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "storage_tools=debug".parse()?
                } else {
                    "storage_tools=info".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting storage-tools v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Configuration ---
    let cli = Cli::parse();
    let config = match Config::try_from(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built successfully.");

    let token = setup_signal_handler()?;

    // --- Execution ---
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let result = run(&config, &token, &mut writer);
    drop(writer);

    // --- Error Handling ---
    if let Err(e) = result {
        match e {
            Error::Interrupted => {
                eprintln!("\nOperation cancelled.");
                std::process::exit(130);
            }
            _ => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
