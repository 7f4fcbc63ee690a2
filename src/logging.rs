//! File logging for the binary.
//!
//! Stdout and stderr are covered by the alternate screen while the page is
//! mounted, so records go to a file through simplelog's `WriteLogger`.

use std::fs::File;
use std::path::Path;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::error::Result;

/// Log file the binary writes next to where it was started.
pub const LOG_FILE: &str = "controlled-context.log";

/// Install a global logger writing to `path` at `level`.
///
/// Fails if the file cannot be created or a logger is already installed.
pub fn init_file_logger(path: impl AsRef<Path>, level: LevelFilter) -> Result<()> {
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let file = File::create(path)?;
    WriteLogger::init(level, config, file)?;
    Ok(())
}
