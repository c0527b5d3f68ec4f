//! Convenience re-exports for common usage
//!
//! ```
//! use seclog::prelude::*;
//!
//! let registry = LogRegistry::new(MemoryLedger::new());
//! assert!(registry.all().unwrap().is_empty());
//! ```

pub use seclog_core::{LogRecord, RegistryError, RegistryResult};
pub use seclog_ledger::{Ledger, MemoryLedger};
pub use seclog_registry::{LogRegistry, Revision};
