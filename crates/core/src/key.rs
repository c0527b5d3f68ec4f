//! Ledger key derivation
//!
//! The registry addresses each record's current value in the ledger under a
//! composite key derived from the record's owner and identifier. This module
//! is the single source of truth for that scheme; nothing else in the
//! workspace builds a ledger key by hand.

/// Separator between the owner and identifier components of a key.
pub const KEY_SEPARATOR: char = ':';

/// Derive the ledger key for a record.
///
/// Pure and deterministic: the same `(isp, log_id)` pair always yields the
/// same key, and distinct pairs yield distinct keys as long as neither
/// component contains [`KEY_SEPARATOR`]. Components are not validated, so a
/// `:` inside either one can collide with another pair. Callers that need
/// collision freedom must keep the separator out of their identifiers.
pub fn composite_key(isp: &str, log_id: &str) -> String {
    format!("{}{}{}", isp, KEY_SEPARATOR, log_id)
}
