//! Optional JSON settings file.
//!
//! ```json
//! { "speed": "fast", "seed": 7, "chairs": 5, "arrival_rate": 60,
//!   "duration_secs": 120, "output_dir": "out", "theme_store": "prefs.json",
//!   "utc_offset_secs": 3600 }
//! ```
//!
//! Every field is optional; command-line flags win over the file.  Log
//! stamps are local time: the machine's UTC offset is folded into the clock
//! origin unless `utc_offset_secs` pins it.

use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use chrono::{Local, Utc};
use serde::Deserialize;
use sync_core::{SimConfig, Speed};
use sync_theme::ColorScheme;

use crate::cli::SimArgs;

pub const DEFAULT_DURATION_SECS: u64 = 60;
pub const DEFAULT_STORE: &str = ".sync-viz/preferences.json";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub speed:           Option<Speed>,
    pub seed:            Option<u64>,
    pub start_unix_secs: Option<i64>,
    pub utc_offset_secs: Option<i32>,
    pub duration_secs:   Option<u64>,
    pub chairs:          Option<u8>,
    pub arrival_rate:    Option<u8>,
    pub output_dir:      Option<PathBuf>,
    pub sqlite:          Option<bool>,
    pub theme_store:     Option<PathBuf>,
    pub system_scheme:   Option<ColorScheme>,
}

impl AppConfig {
    /// Read `path`, or the defaults when no file was given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn store_path(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.theme_store.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE))
    }
}

/// Settings for one simulator run after flags and file are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub sim:         SimConfig,
    pub duration_ms: u64,
    pub realtime:    bool,
    pub output_dir:  Option<PathBuf>,
    pub sqlite:      bool,
    pub quiet:       bool,
}

impl RunSettings {
    pub fn resolve(args: &SimArgs, file: &AppConfig) -> Self {
        let defaults = SimConfig::default();
        let sim = SimConfig {
            start_unix_secs: file.start_unix_secs.unwrap_or_else(|| Utc::now().timestamp())
                + i64::from(file.utc_offset_secs.unwrap_or_else(local_offset_secs)),
            speed:           args.speed.or(file.speed).unwrap_or(defaults.speed),
            seed:            args.seed.or(file.seed).unwrap_or(defaults.seed),
        };
        let duration_secs = args.duration.or(file.duration_secs).unwrap_or(DEFAULT_DURATION_SECS);
        Self {
            sim,
            duration_ms: duration_secs.saturating_mul(1_000),
            realtime:    args.realtime,
            output_dir:  args.output.clone().or_else(|| file.output_dir.clone()),
            sqlite:      args.sqlite || file.sqlite.unwrap_or(false),
            quiet:       args.quiet,
        }
    }
}

fn local_offset_secs() -> i32 {
    Local::now().offset().local_minus_utc()
}
