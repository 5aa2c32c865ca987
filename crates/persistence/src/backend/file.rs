// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A file-per-key backend: each key becomes one JSON document under the
/// store directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    directory: PathBuf,
}

impl FileBackend {
    /// Creates a backend rooted at the given directory.
    ///
    /// The directory is created lazily on first write.
    #[must_use]
    pub fn new(directory: &Path) -> Self {
        Self {
            directory: directory.to_path_buf(),
        }
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{key}.json"))
    }

    /// Reads the document stored under a key, if any.
    ///
    /// A missing file is simply absent; any other read failure is logged
    /// and treated as absent, so a damaged store never aborts a load.
    #[must_use]
    pub fn read(&self, key: &str) -> Option<String> {
        match std::fs::read_to_string(self.document_path(key)) {
            Ok(document) => Some(document),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                warn!(key, error = %err, "failed to read stored document");
                None
            }
        }
    }

    /// Writes the document stored under a key.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::StoreUnavailable` if the directory or
    /// document cannot be written.
    pub fn write(&mut self, key: &str, document: &str) -> Result<(), PersistenceError> {
        std::fs::create_dir_all(&self.directory)?;
        std::fs::write(self.document_path(key), document)?;
        Ok(())
    }
}
