pub mod config;
pub mod error;
pub mod flags;

pub use config::Config;
pub use error::ConfigError;
pub use flags::{Flag, FlagStore};

use anyhow::Result;

/// Initialize the core application.
///
/// Sets up tracing on stderr (the terminal UI owns stdout).
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("taskdeck core initialized");
    Ok(())
}
