//! In-memory ledger backend
//!
//! A versioned, history-retaining implementation of [`Ledger`] backed by a
//! `BTreeMap`. All data lives in memory and is lost on drop. This is the
//! backend every test in the workspace runs against; it mimics the
//! externally-hosted ledger closely enough to exercise the registry:
//!
//! - every `put`/`delete` appends to the touched key's version chain and
//!   advances a shared transaction counter
//! - `delete` removes the current value but keeps the chain, recording a
//!   tombstone version
//! - `rich_query` evaluates equality selectors over stored JSON documents
//! - emitted events are captured and can be inspected after the fact
//!
//! The handle is cheaply cloneable; clones share the same state, so a test
//! can keep one handle for inspection while the registry owns another.

use crate::{HistoryIter, KeyVersion, KvPair, Ledger, ScanIter};
use parking_lot::RwLock;
use seclog_core::LedgerError;
use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;
use std::sync::Arc;

/// A notification captured by [`MemoryLedger::emit_event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedEvent {
    /// The event name.
    pub name: String,
    /// The serialized payload.
    pub payload: Vec<u8>,
}

#[derive(Default)]
struct Inner {
    current: BTreeMap<String, Vec<u8>>,
    history: HashMap<String, Vec<KeyVersion>>,
    events: Vec<EmittedEvent>,
    next_tx: u64,
}

impl Inner {
    fn record_version(&mut self, key: &str, value: Option<Vec<u8>>) {
        let tx_id = self.next_tx;
        self.next_tx += 1;
        self.history
            .entry(key.to_string())
            .or_default()
            .push(KeyVersion { tx_id, value });
    }
}

/// In-memory [`Ledger`] for tests and embedding.
#[derive(Clone, Default)]
pub struct MemoryLedger {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// All events emitted so far, in emission order.
    pub fn events(&self) -> Vec<EmittedEvent> {
        self.inner.read().events.clone()
    }

    /// Number of keys currently holding a value.
    pub fn len(&self) -> usize {
        self.inner.read().current.len()
    }

    /// Whether no key currently holds a value.
    pub fn is_empty(&self) -> bool {
        self.inner.read().current.is_empty()
    }
}

impl Ledger for MemoryLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        Ok(self.inner.read().current.get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        let mut inner = self.inner.write();
        inner.current.insert(key.to_string(), value.to_vec());
        inner.record_version(key, Some(value.to_vec()));
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), LedgerError> {
        let mut inner = self.inner.write();
        if inner.current.remove(key).is_some() {
            inner.record_version(key, None);
        }
        Ok(())
    }

    fn range_scan(&self, start: &str, end: &str) -> Result<ScanIter, LedgerError> {
        if !start.is_empty() && !end.is_empty() && start > end {
            return Err(LedgerError::QueryRejected(format!(
                "range start '{}' is greater than range end '{}'",
                start, end
            )));
        }

        let inner = self.inner.read();
        let low = if start.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(start.to_string())
        };
        let high = if end.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(end.to_string())
        };

        let pairs: Vec<KvPair> = inner
            .current
            .range((low, high))
            .map(|(key, value)| KvPair {
                key: key.clone(),
                value: value.clone(),
            })
            .collect();

        Ok(Box::new(pairs.into_iter().map(Ok)))
    }

    fn rich_query(&self, selector_json: &str) -> Result<ScanIter, LedgerError> {
        let selector = parse_selector(selector_json)?;
        let inner = self.inner.read();

        let pairs: Vec<KvPair> = inner
            .current
            .iter()
            .filter(|(_, value)| matches_selector(value, &selector))
            .map(|(key, value)| KvPair {
                key: key.clone(),
                value: value.clone(),
            })
            .collect();

        Ok(Box::new(pairs.into_iter().map(Ok)))
    }

    fn history_of(&self, key: &str) -> Result<HistoryIter, LedgerError> {
        let versions = self
            .inner
            .read()
            .history
            .get(key)
            .cloned()
            .unwrap_or_default();
        Ok(Box::new(versions.into_iter().map(Ok)))
    }

    fn emit_event(&self, name: &str, payload: &[u8]) -> Result<(), LedgerError> {
        self.inner.write().events.push(EmittedEvent {
            name: name.to_string(),
            payload: payload.to_vec(),
        });
        Ok(())
    }
}

/// Extract the `selector` object from the query document.
fn parse_selector(
    selector_json: &str,
) -> Result<serde_json::Map<String, serde_json::Value>, LedgerError> {
    let query: serde_json::Value = serde_json::from_str(selector_json)
        .map_err(|e| LedgerError::QueryRejected(format!("malformed query document: {}", e)))?;

    match query.get("selector") {
        Some(serde_json::Value::Object(fields)) => Ok(fields.clone()),
        _ => Err(LedgerError::QueryRejected(
            "query document has no selector object".to_string(),
        )),
    }
}

/// Equality match of every selector field against the stored document.
///
/// Values that are not JSON objects never match, mirroring rich-query
/// backends that only index JSON documents.
fn matches_selector(value: &[u8], selector: &serde_json::Map<String, serde_json::Value>) -> bool {
    let doc: serde_json::Value = match serde_json::from_slice(value) {
        Ok(doc) => doc,
        Err(_) => return false,
    };
    selector
        .iter()
        .all(|(field, expected)| doc.get(field) == Some(expected))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_put_delete() {
        let ledger = MemoryLedger::new();
        assert_eq!(ledger.get("k").unwrap(), None);

        ledger.put("k", b"v1").unwrap();
        assert_eq!(ledger.get("k").unwrap(), Some(b"v1".to_vec()));

        ledger.delete("k").unwrap();
        assert_eq!(ledger.get("k").unwrap(), None);
    }

    #[test]
    fn test_history_retains_all_versions() {
        let ledger = MemoryLedger::new();
        ledger.put("k", b"v1").unwrap();
        ledger.put("k", b"v2").unwrap();
        ledger.delete("k").unwrap();

        let versions: Vec<KeyVersion> = ledger
            .history_of("k")
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(versions.len(), 3);
        assert_eq!(versions[0].value.as_deref(), Some(b"v1".as_slice()));
        assert_eq!(versions[1].value.as_deref(), Some(b"v2".as_slice()));
        assert!(versions[2].is_delete());
        assert!(versions[0].tx_id < versions[1].tx_id);
        assert!(versions[1].tx_id < versions[2].tx_id);
    }

    #[test]
    fn test_delete_vacant_key_records_nothing() {
        let ledger = MemoryLedger::new();
        ledger.delete("ghost").unwrap();
        assert_eq!(ledger.history_of("ghost").unwrap().count(), 0);
    }

    #[test]
    fn test_range_scan_is_key_ordered_and_end_exclusive() {
        let ledger = MemoryLedger::new();
        ledger.put("b", b"2").unwrap();
        ledger.put("a", b"1").unwrap();
        ledger.put("c", b"3").unwrap();

        let keys: Vec<String> = ledger
            .range_scan("a", "c")
            .unwrap()
            .map(|r| r.unwrap().key)
            .collect();
        assert_eq!(keys, vec!["a", "b"]);

        let all: Vec<String> = ledger
            .range_scan("", "")
            .unwrap()
            .map(|r| r.unwrap().key)
            .collect();
        assert_eq!(all, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_range_scan_rejects_inverted_bounds() {
        let ledger = MemoryLedger::new();
        ledger.put("a", b"1").unwrap();

        assert!(matches!(
            ledger.range_scan("b", "a"),
            Err(LedgerError::QueryRejected(_))
        ));

        // Unbounded sides are never inverted.
        assert!(ledger.range_scan("", "a").is_ok());
        assert!(ledger.range_scan("b", "").is_ok());
        // Equal bounds are an empty range, not an error.
        assert_eq!(ledger.range_scan("b", "b").unwrap().count(), 0);
    }

    #[test]
    fn test_rich_query_equality_selector() {
        let ledger = MemoryLedger::new();
        ledger.put("a", br#"{"severity":"High"}"#).unwrap();
        ledger.put("b", br#"{"severity":"Low"}"#).unwrap();
        ledger.put("c", b"not json").unwrap();

        let hits: Vec<String> = ledger
            .rich_query(r#"{"selector":{"severity":"High"}}"#)
            .unwrap()
            .map(|r| r.unwrap().key)
            .collect();
        assert_eq!(hits, vec!["a"]);
    }

    #[test]
    fn test_rich_query_rejects_malformed_document() {
        let ledger = MemoryLedger::new();
        assert!(matches!(
            ledger.rich_query("{not json"),
            Err(LedgerError::QueryRejected(_))
        ));
        assert!(matches!(
            ledger.rich_query(r#"{"selector": 7}"#),
            Err(LedgerError::QueryRejected(_))
        ));
    }

    #[test]
    fn test_events_captured_in_order() {
        let ledger = MemoryLedger::new();
        ledger.emit_event("First", b"1").unwrap();
        ledger.emit_event("Second", b"2").unwrap();

        let events = ledger.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name, "First");
        assert_eq!(events[1].name, "Second");
    }

    #[test]
    fn test_clones_share_state() {
        let ledger = MemoryLedger::new();
        let handle = ledger.clone();
        ledger.put("k", b"v").unwrap();
        assert_eq!(handle.get("k").unwrap(), Some(b"v".to_vec()));
    }
}
