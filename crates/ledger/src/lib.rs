//! Ledger abstraction for the security-event log registry
//!
//! The registry never talks to a storage engine directly. It consumes the
//! narrow capability set defined by the [`Ledger`] trait: point reads and
//! writes, an unbounded range scan, a rich equality-selector query, per-key
//! version history, and transaction-scoped event emission. Consensus,
//! endorsement, and durability all live behind this trait.
//!
//! ## Iterators as scoped resources
//!
//! `range_scan`, `rich_query`, and `history_of` hand back owned boxed
//! iterators. A backend that holds a server-side cursor releases it in the
//! iterator's `Drop`, so early returns on error paths still close the
//! cursor. Callers are expected to drain or drop the iterator before the
//! enclosing operation returns.
//!
//! ## Versioning
//!
//! The ledger retains every value ever written under a key, including
//! deletions, as an ordered chain of [`KeyVersion`]s. Deleting a key removes
//! its current value but never its history.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod memory;

pub use memory::{EmittedEvent, MemoryLedger};

use seclog_core::LedgerError;

/// One key/value pair yielded by a scan or rich query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KvPair {
    /// The ledger key the value is stored under.
    pub key: String,
    /// The stored value bytes.
    pub value: Vec<u8>,
}

/// One entry in a key's version history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyVersion {
    /// Identifier of the transaction that produced this version.
    /// Monotonically increasing within a backend.
    pub tx_id: u64,
    /// The value written by that transaction, or `None` for a deletion.
    pub value: Option<Vec<u8>>,
}

impl KeyVersion {
    /// Whether this version records a deletion of the key.
    pub fn is_delete(&self) -> bool {
        self.value.is_none()
    }
}

/// Owned iterator over scan or query results.
pub type ScanIter = Box<dyn Iterator<Item = Result<KvPair, LedgerError>> + Send>;

/// Owned iterator over a key's version history.
pub type HistoryIter = Box<dyn Iterator<Item = Result<KeyVersion, LedgerError>> + Send>;

/// The capability set the registry consumes.
///
/// Implementations provide transactional, versioned key-value storage.
/// Mutual exclusion between conflicting writes is the implementation's
/// concern; callers hold no locks of their own.
pub trait Ledger {
    /// Read the current value under `key`, or `None` if the key is vacant.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Write `value` under `key`, replacing any current value and appending
    /// a new version to the key's history.
    fn put(&self, key: &str, value: &[u8]) -> Result<(), LedgerError>;

    /// Remove the current value under `key` and append a deletion version
    /// to the key's history. Deleting a vacant key is not an error.
    fn delete(&self, key: &str) -> Result<(), LedgerError>;

    /// Scan current values in key order over `[start, end)`. An empty
    /// `start` or `end` leaves that side of the range unbounded. A range
    /// whose start sorts after its end is malformed and fails with
    /// [`LedgerError::QueryRejected`].
    fn range_scan(&self, start: &str, end: &str) -> Result<ScanIter, LedgerError>;

    /// Execute a rich query. `selector_json` is a JSON document of the shape
    /// `{"selector": {"<field>": <value>, ...}}`; a stored value matches
    /// when it is a JSON object whose named fields all equal the selector's
    /// values.
    fn rich_query(&self, selector_json: &str) -> Result<ScanIter, LedgerError>;

    /// Iterate every version ever written under `key`, oldest first,
    /// including deletions. A key that was never written yields an empty
    /// iterator.
    fn history_of(&self, key: &str) -> Result<HistoryIter, LedgerError>;

    /// Attach a named notification payload to the current transaction.
    fn emit_event(&self, name: &str, payload: &[u8]) -> Result<(), LedgerError>;
}
