//! The theme controller: preference state plus its storage.

use tracing::{debug, info, warn};

use crate::{ColorScheme, Theme, ThemeResult, ThemeStore};

/// Storage key the preference is kept under unless told otherwise.
pub const DEFAULT_KEY: &str = "ui-theme";

/// Owns the current [`Theme`], the last OS [`ColorScheme`] signal, and the
/// [`ThemeStore`] every change is written to.
///
/// There is no global instance; callers hold the controller and pass it to
/// whatever renders.
pub struct ThemeController<S: ThemeStore> {
    store:  S,
    key:    String,
    theme:  Theme,
    system: ColorScheme,
}

impl<S: ThemeStore> ThemeController<S> {
    /// Read the preference from `store`.
    ///
    /// A missing key, or a value that is not a theme, starts at
    /// [`Theme::Light`].  Storage failures are returned.
    pub fn load(store: S, key: impl Into<String>) -> ThemeResult<Self> {
        let key = key.into();
        let theme = match store.load(&key)? {
            None => Theme::default(),
            Some(raw) => raw.parse::<Theme>().unwrap_or_else(|_| {
                warn!(key = %key, value = %raw, "ignoring unrecognised stored theme");
                Theme::default()
            }),
        };
        debug!(key = %key, %theme, "theme loaded");
        Ok(Self { store, key, theme, system: ColorScheme::default() })
    }

    /// Seed the OS colour-scheme signal.
    pub fn with_system(mut self, system: ColorScheme) -> Self {
        self.system = system;
        self
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn system(&self) -> ColorScheme {
        self.system
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The scheme to draw with right now.
    pub fn effective(&self) -> ColorScheme {
        self.theme.resolve(self.system)
    }

    /// Persist `theme` and make it current.  On a storage error the current
    /// theme is left as it was.
    pub fn set_theme(&mut self, theme: Theme) -> ThemeResult<()> {
        self.store.save(&self.key, theme.as_str())?;
        info!(from = %self.theme, to = %theme, "theme changed");
        self.theme = theme;
        Ok(())
    }

    /// Light or system becomes dark; dark becomes light.  Returns the new theme.
    pub fn toggle(&mut self) -> ThemeResult<Theme> {
        let next = self.theme.toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    /// Record a new OS colour-scheme signal.
    ///
    /// Returns the new effective scheme when it changed, which only happens
    /// while following the system.
    pub fn system_changed(&mut self, scheme: ColorScheme) -> Option<ColorScheme> {
        let before = self.effective();
        self.system = scheme;
        let after = self.effective();
        if after != before {
            debug!(%after, "system colour scheme re-resolved");
            Some(after)
        } else {
            None
        }
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
