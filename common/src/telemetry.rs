//! Provides helper functions for initializing logging.
use anyhow::Result;
use tracing_subscriber::{filter::LevelFilter, prelude::*, EnvFilter, Registry};

/// Initialize logging to stderr.
///
/// Defaults to INFO unless `RUST_LOG` says otherwise. When `json` is set every event is written
/// as a single JSON line.
pub fn init(json: bool) -> Result<()> {
    let log_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()?;

    if json {
        let logger = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_filter(log_filter);
        tracing::subscriber::set_global_default(Registry::default().with(logger))?;
    } else {
        let logger = tracing_subscriber::fmt::layer()
            .with_ansi(true)
            .compact()
            .with_writer(std::io::stderr)
            .with_filter(log_filter);
        tracing::subscriber::set_global_default(Registry::default().with(logger))?;
    }
    Ok(())
}
