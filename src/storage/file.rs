//! Single-file JSON store, the desktop analog of browser local storage.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use super::KeyValueStore;

/// All entries live in one JSON object, flushed after every mutation.
/// BTreeMap keeps the on-disk key order stable across runs.
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open a store at `path`, loading whatever is readable there.
    ///
    /// A missing file is a fresh store. An unreadable or malformed file is
    /// logged and treated as empty; the next write replaces it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(
                        "store file {} is corrupt ({}), starting empty",
                        path.display(),
                        e
                    );
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn flush(&self) {
        let raw = match serde_json::to_string_pretty(&self.entries) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!("failed to serialize store: {}", e);
                return;
            }
        };
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Err(e) = fs::write(&self.path, raw) {
            tracing::warn!("failed to write store file {}: {}", self.path.display(), e);
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.flush();
        }
    }
}
