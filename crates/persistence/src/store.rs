// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::backend::{FileBackend, MemoryBackend, StoreBackend};
use crate::error::PersistenceError;
use std::path::Path;
use tracing::{debug, warn};

/// The key-value collection store.
///
/// Every collection is one JSON array document under its key, rewritten
/// whole on each save (last write wins). Absent or corrupt documents load
/// as an empty collection rather than propagating a parse failure, so a
/// damaged store degrades to a fresh one instead of breaking the caller.
#[derive(Debug, Clone)]
pub struct Store {
    backend: StoreBackend,
}

impl Store {
    /// Creates a store over an in-memory backend.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            backend: StoreBackend::Memory(MemoryBackend::new()),
        }
    }

    /// Creates a store over a file backend rooted at the given directory.
    #[must_use]
    pub fn on_disk(directory: &Path) -> Self {
        Self {
            backend: StoreBackend::File(FileBackend::new(directory)),
        }
    }

    /// Loads the collection stored under a key.
    ///
    /// Absent, corrupt, or non-array documents yield an empty collection;
    /// corruption is logged, never raised.
    #[must_use]
    pub fn load_collection(&self, key: &str) -> Vec<serde_json::Value> {
        let Some(document) = self.backend.read(key) else {
            return Vec::new();
        };

        match serde_json::from_str::<serde_json::Value>(&document) {
            Ok(serde_json::Value::Array(records)) => records,
            Ok(_) => {
                warn!(key, "stored collection is not an array; treating as empty");
                Vec::new()
            }
            Err(err) => {
                warn!(key, error = %err, "stored collection is corrupt; treating as empty");
                Vec::new()
            }
        }
    }

    /// Saves a whole collection under a key.
    ///
    /// # Errors
    ///
    /// Returns a `PersistenceError` if the collection cannot be encoded
    /// or the backend cannot be written. Failed saves are soft for the
    /// caller's user-visible flow: report and continue.
    pub fn save_collection(
        &mut self,
        key: &str,
        records: &[serde_json::Value],
    ) -> Result<(), PersistenceError> {
        let document: String = serde_json::to_string(records)?;
        self.backend.write(key, &document)?;
        debug!(key, count = records.len(), "collection saved");
        Ok(())
    }

    /// Appends one record to the collection under a key.
    ///
    /// The collection is read, extended, and rewritten whole.
    ///
    /// # Errors
    ///
    /// Same as [`Store::save_collection`].
    pub fn append(&mut self, key: &str, record: serde_json::Value) -> Result<(), PersistenceError> {
        let mut records: Vec<serde_json::Value> = self.load_collection(key);
        records.push(record);
        self.save_collection(key, &records)
    }
}
