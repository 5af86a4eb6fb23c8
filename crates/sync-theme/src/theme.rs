use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ThemeError;

/// The user's stored preference.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    /// Follow the operating system's colour scheme.
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light  => "light",
            Theme::Dark   => "dark",
            Theme::System => "system",
        }
    }

    /// The theme a toggle switches to: dark from light or system, light from dark.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light | Theme::System => Theme::Dark,
            Theme::Dark                  => Theme::Light,
        }
    }

    pub fn resolve(self, system: ColorScheme) -> ColorScheme {
        match self {
            Theme::Light  => ColorScheme::Light,
            Theme::Dark   => ColorScheme::Dark,
            Theme::System => system,
        }
    }

    /// Hint shown next to the toggle.
    pub fn toggle_label(self) -> &'static str {
        if self == Theme::Dark {
            "Dark Mode (Click for Light)"
        } else {
            "Light Mode (Click for Dark)"
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light"  => Ok(Theme::Light),
            "dark"   => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            _        => Err(ThemeError::UnknownTheme(s.to_owned())),
        }
    }
}

/// A concrete scheme: what the OS reports and what gets rendered.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark  => "dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorScheme::Light),
            "dark"  => Ok(ColorScheme::Dark),
            _       => Err(ThemeError::UnknownScheme(s.to_owned())),
        }
    }
}
