//! Settlement service
//!
//! Wraps the two settlement transitions on the ledger. Both are idempotent
//! and need no stored history; undo recomputes the original due from the
//! amounts recorded at creation.

use crate::error::KilnResult;
use crate::models::{Entry, EntryId};
use crate::storage::Storage;

/// Service for settling dues
pub struct SettlementService<'a> {
    storage: &'a Storage,
}

impl<'a> SettlementService<'a> {
    /// Create a new settlement service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Mark a sale settled and return the updated entry
    ///
    /// Returns `Ok(None)` when no entry has this ID.
    pub fn mark_paid(&self, id: EntryId) -> KilnResult<Option<Entry>> {
        if self.storage.entries.mark_paid(id)? {
            self.storage.entries.get(id)
        } else {
            Ok(None)
        }
    }

    /// Undo a settlement and return the updated entry
    ///
    /// Returns `Ok(None)` when no entry has this ID.
    pub fn undo_paid(&self, id: EntryId) -> KilnResult<Option<Entry>> {
        if self.storage.entries.undo_paid(id)? {
            self.storage.entries.get(id)
        } else {
            Ok(None)
        }
    }
}
