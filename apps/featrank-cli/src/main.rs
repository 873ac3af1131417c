//! featrank - weighted latent-feature recommendation report
//!
//! Prints the top items for each configured feature dimension, then every
//! item ranked by the configured user's weighted score.

mod cli;

use std::io;

use clap::Parser;
use featrank_core::{run, ReportConfig};
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = ReportConfig::resolve(cli.config.as_deref())?;
    cli.apply(&mut config);
    tracing::debug!("Effective config: {:?}", config);

    let stdout = io::stdout();
    run(&config, cli.format.into(), &mut stdout.lock())?;
    Ok(())
}
