//! Record registry over a versioned key-value ledger
//!
//! [`LogRegistry`] maps security-event log records onto ledger keys and
//! guards every mutation with the existence checks the record lifecycle
//! demands. It is a stateless layer: one registry operation runs to
//! completion per external invocation, inside whatever transaction context
//! the hosting process supplies, and all serialization of conflicting
//! writes is the ledger's concern.
//!
//! ## Operations
//!
//! | Group | Operations |
//! |-------|------------|
//! | Records | `exists`, `create`, `read`, `update`, `delete`, `seed` |
//! | Queries | `all`, `by_isp`, `by_severity`, `by_event_type` |
//! | History | `history` |
//!
//! Record lifecycle per key: absent → present (`create`), present →
//! present' (`update`), present → absent (`delete`). Illegal transitions
//! are reported errors, never silent no-ops.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod emit;
mod history;
mod query;
mod store;

pub use history::Revision;

use seclog_ledger::Ledger;

/// The record registry. Generic over the ledger it runs against.
pub struct LogRegistry<L: Ledger> {
    ledger: L,
}

impl<L: Ledger> LogRegistry<L> {
    /// Create a registry over `ledger`.
    pub fn new(ledger: L) -> Self {
        Self { ledger }
    }

    /// Borrow the underlying ledger.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Consume the registry, returning the underlying ledger.
    pub fn into_ledger(self) -> L {
        self.ledger
    }
}
