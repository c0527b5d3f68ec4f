//! Notification emission
//!
//! Serializes a typed payload and attaches it to the current transaction as
//! a named event. A failure here is a hard error that aborts the enclosing
//! operation; the write that preceded it is not rolled back by the registry
//! (rollback, if any, is the ledger's transaction semantics).

use seclog_core::{RegistryError, RegistryResult};
use seclog_ledger::Ledger;
use serde::Serialize;

pub(crate) fn emit<L: Ledger, P: Serialize>(
    ledger: &L,
    name: &'static str,
    payload: &P,
) -> RegistryResult<()> {
    let bytes = serde_json::to_vec(payload).map_err(|e| RegistryError::Encode {
        what: "event payload",
        source: e,
    })?;
    ledger
        .emit_event(name, &bytes)
        .map_err(|e| RegistryError::backend("emit_event", e))
}
