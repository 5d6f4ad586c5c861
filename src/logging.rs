//! File logging.
//!
//! The log level comes from the config, but loading the config logs too. So
//! the logger goes in first at a startup level, and [`apply_level`] narrows or
//! widens it once the config is resolved.

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io;
use std::path::Path;

/// Written to the current directory.
pub const LOG_FILE: &str = "rankfavs.log";

/// Level used until the config has been read.
const STARTUP_LEVEL: LevelFilter = LevelFilter::Debug;

/// Install the process-wide file logger. Fails if one is already set.
pub fn init(path: &Path) -> io::Result<()> {
    let log_file = File::create(path)?;
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    // The logger passes everything; the global max level does the filtering
    WriteLogger::init(LevelFilter::Trace, log_config, log_file).map_err(io::Error::other)?;
    log::set_max_level(STARTUP_LEVEL);
    Ok(())
}

/// Switch to the configured level.
pub fn apply_level(level: LevelFilter) {
    log::set_max_level(level);
    log::info!("Log level set to {}", level);
}
