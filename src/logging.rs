//! Logging setup.
//!
//! `RUST_LOG` takes precedence over the `--log-level` flag:
//! ```bash
//! RUST_LOG=keypad_calc=trace keypad-calc --keys "2+3="
//! ```

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Where log records go.
pub(crate) enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    /// Discard everything; used by the TUI when no log file was given.
    Off,
}

/// Install the global subscriber. Only the first call takes effect.
pub(crate) fn init(level: &str, target: LogTarget<'_>) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(level).with_context(|| format!("invalid log level {level:?}"))?
    };

    let file = match target {
        LogTarget::File(path) => Some(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file {}", path.display()))?,
        ),
        LogTarget::Stderr => None,
        LogTarget::Off => return Ok(()),
    };

    INIT.call_once(|| {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true);
        match file {
            Some(f) => builder.with_ansi(false).with_writer(Mutex::new(f)).init(),
            None => builder.with_writer(std::io::stderr).init(),
        }
    });
    Ok(())
}
