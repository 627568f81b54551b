//! Diagnostics via tracing
//!
//! The terminal owns stdout, so events only go somewhere when a log file is
//! given. Without one, `tracing` macros are no-ops.

use anyhow::{anyhow, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

/// Install a file subscriber. Returns whether one was installed.
pub fn init(path: Option<&Path>, level: Level) -> Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow!("Could not install logger: {e}"))?;

    Ok(true)
}
