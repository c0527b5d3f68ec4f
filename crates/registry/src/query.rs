//! Attribute queries over the stored records
//!
//! `all` issues an unbounded range scan; `by_isp`, `by_severity`, and
//! `by_event_type` build a one-field equality selector and delegate to the
//! ledger's rich-query capability. Results are materialized eagerly into a
//! `Vec` with no ordering guarantee beyond what the ledger yields
//! (key-lexicographic for scans in the common case).
//!
//! Selectors are constructed as structured JSON values and then serialized,
//! so caller-supplied strings are always embedded as data. A value
//! containing selector syntax cannot alter the query.
//!
//! A single undecodable matched value aborts the whole query with `Decode`
//! rather than being skipped; dropping the iterator on that early return
//! releases any backend-held cursor.

use crate::store::decode_record;
use crate::LogRegistry;
use seclog_core::{LogRecord, RegistryError, RegistryResult};
use seclog_ledger::{Ledger, ScanIter};
use tracing::debug;

impl<L: Ledger> LogRegistry<L> {
    /// Every record currently stored, via an unbounded range scan.
    ///
    /// ## Errors
    ///
    /// - `Query`: the ledger rejected the scan
    /// - `Decode`: a stored value failed to deserialize
    pub fn all(&self) -> RegistryResult<Vec<LogRecord>> {
        let iter = self
            .ledger()
            .range_scan("", "")
            .map_err(|e| RegistryError::query("all", e))?;
        let records = drain(iter, "all")?;
        debug!(count = records.len(), "full scan complete");
        Ok(records)
    }

    /// Records owned by `isp`.
    pub fn by_isp(&self, isp: &str) -> RegistryResult<Vec<LogRecord>> {
        self.by_field("isp", isp, "by_isp")
    }

    /// Records with the given severity label.
    pub fn by_severity(&self, severity: &str) -> RegistryResult<Vec<LogRecord>> {
        self.by_field("severity", severity, "by_severity")
    }

    /// Records with the given event type.
    pub fn by_event_type(&self, event_type: &str) -> RegistryResult<Vec<LogRecord>> {
        self.by_field("event_type", event_type, "by_event_type")
    }

    /// One-field equality selector, executed by the ledger.
    ///
    /// ## Errors
    ///
    /// - `Query`: the ledger rejected the selector (e.g. rich queries
    ///   unsupported by the configured backend)
    /// - `Decode`: a matched value failed to deserialize
    fn by_field(
        &self,
        field: &str,
        value: &str,
        op: &'static str,
    ) -> RegistryResult<Vec<LogRecord>> {
        let selector = serde_json::json!({ "selector": { field: value } });
        let iter = self
            .ledger()
            .rich_query(&selector.to_string())
            .map_err(|e| RegistryError::query(op, e))?;
        let records = drain(iter, op)?;
        debug!(field, value, count = records.len(), "selector query complete");
        Ok(records)
    }
}

fn drain(iter: ScanIter, op: &'static str) -> RegistryResult<Vec<LogRecord>> {
    let mut records = Vec::new();
    for item in iter {
        let pair = item.map_err(|e| RegistryError::query(op, e))?;
        records.push(decode_record(&pair.key, &pair.value)?);
    }
    Ok(records)
}
