//! Snapshot export and import
//!
//! A snapshot is the complete ledger (entries plus the party directory) as
//! one JSON document, used for hand-carried backups between machines.
//! Import is a wholesale replace: the snapshot is parsed and validated in
//! full before either store is touched, so a bad file leaves the ledger
//! exactly as it was.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

use crate::error::{KilnError, KilnResult};
use crate::models::{Customer, Entry};
use crate::storage::Storage;

/// Current snapshot format version. Informational; import does not reject
/// on mismatch.
pub const SNAPSHOT_VERSION: &str = "1.0";

/// Complete ledger snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// All entries, newest first
    pub entries: Vec<Entry>,

    /// The party directory
    #[serde(default)]
    pub customers: Vec<Customer>,

    /// Format version of the writer
    pub version: String,

    /// When the snapshot was taken
    pub exported_at: DateTime<Utc>,
}

impl Snapshot {
    /// Capture a snapshot of the current ledger
    pub fn from_storage(storage: &Storage) -> KilnResult<Self> {
        Ok(Self {
            entries: storage.entries.all()?,
            customers: storage.customers.all()?,
            version: SNAPSHOT_VERSION.to_string(),
            exported_at: Utc::now(),
        })
    }

    /// Write the snapshot as pretty-printed JSON
    pub fn write_to<W: Write>(&self, mut writer: W) -> KilnResult<()> {
        serde_json::to_writer_pretty(&mut writer, self)
            .map_err(|e| KilnError::Export(format!("Failed to serialize snapshot: {}", e)))?;
        writer
            .flush()
            .map_err(|e| KilnError::Export(format!("Failed to flush snapshot: {}", e)))?;
        Ok(())
    }

    /// Parse a snapshot from a reader
    ///
    /// The document must be a JSON object whose `entries` field is an
    /// array. `customers` defaults to empty and `version` is accepted as
    /// whatever the writer recorded. Anything else is rejected before any
    /// state changes.
    pub fn read_from<R: Read>(reader: R) -> KilnResult<Self> {
        let value: serde_json::Value = serde_json::from_reader(reader)
            .map_err(|e| KilnError::InvalidSnapshotFormat(format!("not valid JSON: {}", e)))?;

        let entries = value.get("entries").ok_or_else(|| {
            KilnError::InvalidSnapshotFormat("missing 'entries' field".to_string())
        })?;
        if !entries.is_array() {
            return Err(KilnError::InvalidSnapshotFormat(
                "'entries' is not an array".to_string(),
            ));
        }

        serde_json::from_value(value)
            .map_err(|e| KilnError::InvalidSnapshotFormat(format!("malformed record: {}", e)))
    }

    /// Replace the entire ledger with this snapshot's contents
    pub fn restore(self, storage: &Storage) -> KilnResult<()> {
        storage.entries.replace_all(self.entries)?;
        storage.customers.replace_all(self.customers)?;
        Ok(())
    }
}
