//! Logging bootstrap.

use std::str::FromStr;

use anyhow::{Result, anyhow};
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Log to stderr at `level` ("error", "warn", "info", "debug", "trace" or "off").
pub fn init(level: &str) -> Result<()> {
    let filter =
        LevelFilter::from_str(level).map_err(|_| anyhow!("Unknown log level '{}'", level))?;

    let config = ConfigBuilder::new()
        .add_filter_allow_str("hive_events")
        .build();

    TermLogger::init(filter, config, TerminalMode::Stderr, ColorChoice::Auto)
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
