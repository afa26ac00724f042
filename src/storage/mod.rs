//! Injected key-value persistence.
//!
//! Models the flat client-side storage the games save into: string keys,
//! string values, best effort. Writes that fail are logged and swallowed;
//! reads that fail or return garbage are treated as "nothing stored". A
//! broken store must never take a running game down with it.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Fixed keys: one session blob per game variant plus the shared history.
pub const KEY_IMPOSTOR: &str = "session.impostor";
pub const KEY_SPYFALL: &str = "session.spyfall";
pub const KEY_WAVELENGTH: &str = "session.wavelength";
pub const KEY_ODD_ONE: &str = "session.oddone";
pub const KEY_HISTORY: &str = "history";

/// Flat string-to-string storage.
pub trait KeyValueStore {
    /// Stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, best effort.
    fn set(&mut self, key: &str, value: &str);

    /// Drop `key`. Removing an absent key is fine.
    fn remove(&mut self, key: &str);
}
