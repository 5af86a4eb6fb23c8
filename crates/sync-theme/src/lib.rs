//! `sync-theme` — the one piece of state that outlives a session.
//!
//! | Item                  | Role                                                   |
//! |-----------------------|--------------------------------------------------------|
//! | [`Theme`]             | stored preference: `light`, `dark` or `system`         |
//! | [`ColorScheme`]       | what actually gets drawn: `light` or `dark`            |
//! | [`ThemeStore`]        | string key/value storage the preference lives in       |
//! | [`ThemeController`]   | loads, resolves, toggles and persists the preference   |
//!
//! Stores: [`MemoryStore`] (tests), [`JsonFileStore`] (one JSON object on
//! disk) and `SqliteStore` behind the `sqlite` feature.
//!
//! ```rust,ignore
//! let store = JsonFileStore::new("prefs.json");
//! let mut themes = ThemeController::load(store, DEFAULT_KEY)?
//!     .with_system(ColorScheme::Dark);
//! themes.toggle()?;                    // persisted immediately
//! let scheme = themes.effective();
//! ```

pub mod controller;
pub mod error;
pub mod store;
pub mod theme;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use controller::{DEFAULT_KEY, ThemeController};
pub use error::{ThemeError, ThemeResult};
pub use store::{JsonFileStore, MemoryStore, ThemeStore};
pub use theme::{ColorScheme, Theme};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
