//! Revision history of a single record
//!
//! The ledger retains every value ever written under a key, including
//! deletions. `history` walks that chain in the order the ledger yields it
//! (oldest first for the in-memory backend) and decodes each version.
//!
//! A version with no value bytes is a deletion. It is surfaced as
//! [`Revision::Deleted`] rather than skipped, so the length of the returned
//! sequence always equals the true number of ledger writes to the key.

use crate::store::decode_record;
use crate::LogRegistry;
use seclog_core::{composite_key, LogRecord, RegistryError, RegistryResult};
use seclog_ledger::Ledger;
use tracing::debug;

/// One historical version of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    /// The record as it was stored by a create or update.
    Present(LogRecord),
    /// A tombstone left by a delete. Carries the identity of the record the
    /// version chain belongs to, since the ledger stores no bytes for it.
    Deleted {
        /// Identifier of the deleted record.
        log_id: String,
        /// Owning ISP of the deleted record.
        isp: String,
    },
}

impl Revision {
    /// The record for a `Present` revision, `None` for a tombstone.
    pub fn record(&self) -> Option<&LogRecord> {
        match self {
            Revision::Present(record) => Some(record),
            Revision::Deleted { .. } => None,
        }
    }

    /// Whether this revision is a deletion tombstone.
    pub fn is_deleted(&self) -> bool {
        matches!(self, Revision::Deleted { .. })
    }
}

impl<L: Ledger> LogRegistry<L> {
    /// Every version ever written for `(log_id, isp)`, oldest first,
    /// deletions included. A record that was never written yields an empty
    /// sequence, not an error.
    ///
    /// ## Errors
    ///
    /// - `Query`: the ledger failed to open or advance the history stream
    /// - `Decode`: a version's payload is not a valid record
    pub fn history(&self, log_id: &str, isp: &str) -> RegistryResult<Vec<Revision>> {
        let key = composite_key(isp, log_id);
        let iter = self
            .ledger()
            .history_of(&key)
            .map_err(|e| RegistryError::query("history", e))?;

        let mut revisions = Vec::new();
        for item in iter {
            let version = item.map_err(|e| RegistryError::query("history", e))?;
            match version.value {
                Some(bytes) => revisions.push(Revision::Present(decode_record(&key, &bytes)?)),
                None => revisions.push(Revision::Deleted {
                    log_id: log_id.to_string(),
                    isp: isp.to_string(),
                }),
            }
        }

        debug!(key = %key, versions = revisions.len(), "history read");
        Ok(revisions)
    }
}
