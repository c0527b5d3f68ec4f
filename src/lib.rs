//! # Seclog
//!
//! Ledger-backed registry for security-event log records.
//!
//! Seclog maps log records onto the keys of an external transactional,
//! versioned key-value ledger and layers record semantics on top: guarded
//! CRUD, attribute-equality queries, full revision history, and
//! best-effort change notifications.
//!
//! ## Quick Start
//!
//! ```
//! use seclog::prelude::*;
//!
//! let registry = LogRegistry::new(MemoryLedger::new());
//!
//! registry.create(&LogRecord {
//!     log_id: "log1".to_string(),
//!     isp: "ISP1".to_string(),
//!     timestamp: "2024-12-01T12:00:00Z".to_string(),
//!     source_ip: "192.168.1.1".to_string(),
//!     destination_ip: "10.0.0.1".to_string(),
//!     source_port: 1234,
//!     destination_port: 80,
//!     protocol: "TCP".to_string(),
//!     event_type: "DDoS".to_string(),
//!     severity: "High".to_string(),
//!     message: "Suspicious traffic detected".to_string(),
//! })?;
//!
//! let record = registry.read("log1", "ISP1")?;
//! assert_eq!(record.severity, "High");
//!
//! let high = registry.by_severity("High")?;
//! assert_eq!(high.len(), 1);
//! # Ok::<(), seclog::RegistryError>(())
//! ```
//!
//! ## Layers
//!
//! - [`seclog_core`]: record type, key scheme, event payloads, errors
//! - [`seclog_ledger`]: the narrow ledger capability trait and an
//!   in-memory backend for tests and embedding
//! - [`seclog_registry`]: the registry itself

#![warn(missing_docs)]

pub mod prelude;

pub use seclog_core::{
    composite_key, LedgerError, LogAdded, LogDeleted, LogRecord, RegistryError, RegistryResult,
    KEY_SEPARATOR, LOG_ADDED, LOG_DELETED,
};
pub use seclog_ledger::{EmittedEvent, HistoryIter, KeyVersion, KvPair, Ledger, MemoryLedger, ScanIter};
pub use seclog_registry::{LogRegistry, Revision};
