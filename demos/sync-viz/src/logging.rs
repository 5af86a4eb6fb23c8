//! Tracing subscriber setup.
//!
//! Console output goes to stderr at the chosen level so frames on stdout
//! stay readable.  With `--log-file`, everything down to `debug` is also
//! written there without colour codes.

use std::fs::{File, create_dir_all};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

pub fn init_tracing(console_level: Level, log_file: Option<&Path>) -> Result<()> {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_level.to_string()));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let file_layer = match log_file {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
            }
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("installing tracing subscriber")?;

    tracing::debug!(console = %console_level, file = ?log_file, "tracing initialised");
    Ok(())
}
