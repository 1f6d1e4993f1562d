//! Storage layer for kiln-ledger
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Data files load leniently so a corrupt file never blocks the
//! ledger from starting.

pub mod customers;
pub mod entries;
pub mod file_io;

pub use customers::CustomerDirectory;
pub use entries::EntryStore;
pub use file_io::{read_json, read_json_lenient, write_json_atomic};

use crate::config::paths::KilnPaths;
use crate::error::KilnResult;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: KilnPaths,
    pub entries: EntryStore,
    pub customers: CustomerDirectory,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: KilnPaths) -> KilnResult<Self> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            entries: EntryStore::new(paths.entries_file()),
            customers: CustomerDirectory::new(paths.customers_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &KilnPaths {
        &self.paths
    }

    /// Load all data from disk, collecting warnings for files that had to
    /// be skipped as malformed
    pub fn load_all(&mut self) -> KilnResult<Vec<String>> {
        let mut warnings = Vec::new();
        if let Some(w) = self.entries.load()? {
            warnings.push(w);
        }
        if let Some(w) = self.customers.load()? {
            warnings.push(w);
        }
        Ok(warnings)
    }

    /// Save all data to disk
    pub fn save_all(&self) -> KilnResult<()> {
        self.entries.save()?;
        self.customers.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }
}
