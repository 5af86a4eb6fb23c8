//! Key/value storage backends for the theme preference.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::ThemeResult;

/// String key/value storage.  Keys that were never saved load as `None`.
pub trait ThemeStore {
    fn load(&self, key: &str) -> ThemeResult<Option<String>>;

    fn save(&mut self, key: &str, value: &str) -> ThemeResult<()>;
}

/// In-process store.  Clone it (or use [`ThemeController::into_store`]) to
/// carry entries across controller instances.
///
/// [`ThemeController::into_store`]: crate::ThemeController::into_store
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self, key: &str) -> ThemeResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> ThemeResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// All keys in one JSON object on disk, e.g. `{"ui-theme": "dark"}`.
///
/// Saves rewrite the whole file through a temporary sibling and a rename,
/// so a crash leaves either the old or the new object.  A missing file is
/// an empty store.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> ThemeResult<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl ThemeStore for JsonFileStore {
    fn load(&self, key: &str) -> ThemeResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&mut self, key: &str, value: &str) -> ThemeResult<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_owned(), value.to_owned());

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let tmp = self.tmp_path();
        let mut file = File::create(&tmp)?;
        file.write_all(&serde_json::to_vec_pretty(&entries)?)?;
        file.sync_all()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
