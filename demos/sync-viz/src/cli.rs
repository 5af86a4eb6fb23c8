//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use sync_core::Speed;
use sync_smokers::{Ingredient, SmokersError};
use sync_theme::{ColorScheme, Theme};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "sync-viz")]
#[command(about = "Watch the sleeping barber and cigarette smokers problems play out")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// JSON file with default settings; flags override it
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Console log level (RUST_LOG takes precedence)
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Also write a full debug log to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Where the theme preference is kept (`.db` selects SQLite, anything else JSON)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Colour scheme the OS currently reports
    #[arg(long, global = true, value_parser = parse_scheme)]
    pub system_scheme: Option<ColorScheme>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the sleeping barber simulator
    Barber(BarberArgs),

    /// Run the cigarette smokers simulator
    Smokers(SmokersArgs),

    /// Show or change the display theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

/// Options shared by both simulators.
#[derive(Args, Debug, Clone, Default)]
pub struct SimArgs {
    /// Tick speed: slow, normal, fast (or 3000, 2000, 1000 ms)
    #[arg(long)]
    pub speed: Option<Speed>,

    /// RNG seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Simulated seconds to run
    #[arg(short, long)]
    pub duration: Option<u64>,

    /// Pace simulated time against the real clock (Ctrl-C stops)
    #[arg(long)]
    pub realtime: bool,

    /// Directory for events and summaries
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write output.db instead of CSV files
    #[arg(long)]
    pub sqlite: bool,

    /// Print only the final frame
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args, Debug, Clone)]
pub struct BarberArgs {
    #[command(flatten)]
    pub sim: SimArgs,

    /// Waiting chairs (1-10)
    #[arg(long)]
    pub chairs: Option<u8>,

    /// Arrival chance per trial in percent (10-100, step 10)
    #[arg(long)]
    pub arrival_rate: Option<u8>,

    /// Customers to let in by hand before the run starts
    #[arg(long, default_value_t = 0)]
    pub add: u32,
}

#[derive(Args, Debug, Clone)]
pub struct SmokersArgs {
    #[command(flatten)]
    pub sim: SimArgs,

    /// Pair the agent puts down first, e.g. `tobacco+paper`
    #[arg(long, value_parser = parse_pair)]
    pub force: Option<[Ingredient; 2]>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ThemeAction {
    /// Print the stored theme and what it resolves to
    Get,
    /// Store a theme: light, dark or system
    Set {
        #[arg(value_parser = parse_theme)]
        theme: Theme,
    },
    /// Light or system becomes dark, dark becomes light
    Toggle,
    /// Print only the colour scheme that would be drawn
    Resolve,
}

/// Console log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_tracing_level(self) -> Level {
        match self {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn  => Level::WARN,
            LogLevel::Info  => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

fn parse_pair(s: &str) -> Result<[Ingredient; 2], SmokersError> {
    Ingredient::parse_pair(s)
}

fn parse_theme(s: &str) -> Result<Theme, sync_theme::ThemeError> {
    s.parse()
}

fn parse_scheme(s: &str) -> Result<ColorScheme, sync_theme::ThemeError> {
    s.parse()
}
