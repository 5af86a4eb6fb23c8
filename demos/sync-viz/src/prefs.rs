//! Theme storage selection and the `theme` subcommand.

use std::path::Path;

use anyhow::{Context, Result};
use sync_theme::{
    ColorScheme, DEFAULT_KEY, JsonFileStore, SqliteStore, ThemeController, ThemeResult, ThemeStore,
};
use tracing::warn;

use crate::cli::ThemeAction;
use crate::control::Console;

/// JSON file or SQLite database, chosen by file extension.
pub enum AnyStore {
    Json(JsonFileStore),
    Sqlite(SqliteStore),
}

impl AnyStore {
    pub fn open(path: &Path) -> ThemeResult<Self> {
        if path.extension().is_some_and(|ext| ext == "db" || ext == "sqlite") {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                std::fs::create_dir_all(dir)?;
            }
            Ok(AnyStore::Sqlite(SqliteStore::open(path)?))
        } else {
            Ok(AnyStore::Json(JsonFileStore::new(path)))
        }
    }
}

impl ThemeStore for AnyStore {
    fn load(&self, key: &str) -> ThemeResult<Option<String>> {
        match self {
            AnyStore::Json(s)   => s.load(key),
            AnyStore::Sqlite(s) => s.load(key),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> ThemeResult<()> {
        match self {
            AnyStore::Json(s)   => s.save(key, value),
            AnyStore::Sqlite(s) => s.save(key, value),
        }
    }
}

pub fn open_controller(path: &Path, system: ColorScheme) -> Result<ThemeController<AnyStore>> {
    let store = AnyStore::open(path).with_context(|| format!("opening theme store {}", path.display()))?;
    let controller = ThemeController::load(store, DEFAULT_KEY)
        .with_context(|| format!("reading theme from {}", path.display()))?;
    Ok(controller.with_system(system))
}

/// Theme state for a simulator run.  An unreadable store only costs the
/// colours.
pub fn console(path: &Path, system: ColorScheme) -> Console<AnyStore> {
    match open_controller(path, system) {
        Ok(themes) => Console::new(Some(themes)),
        Err(e) => {
            warn!(error = %format!("{e:#}"), "theme unavailable, drawing light");
            Console::new(None)
        }
    }
}

/// Carry out one `theme` action and return the line to print.
pub fn theme_command<S: ThemeStore>(action: &ThemeAction, themes: &mut ThemeController<S>) -> Result<String> {
    match action {
        ThemeAction::Get => {}
        ThemeAction::Set { theme } => themes.set_theme(*theme).context("saving theme")?,
        ThemeAction::Toggle => {
            themes.toggle().context("saving theme")?;
        }
        ThemeAction::Resolve => return Ok(themes.effective().to_string()),
    }
    Ok(format!(
        "{} (draws {}) - {}",
        themes.theme(),
        themes.effective(),
        themes.theme().toggle_label()
    ))
}
