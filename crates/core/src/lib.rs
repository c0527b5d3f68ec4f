//! Core types for the security-event log registry
//!
//! This crate defines the contract shared by the ledger abstraction and the
//! registry built on top of it:
//! - [`LogRecord`]: the security-event log entry
//! - [`composite_key`]: the single source of truth for the ledger key scheme
//! - [`LogAdded`] / [`LogDeleted`]: notification payloads
//! - [`RegistryError`] / [`LedgerError`]: the error taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod event;
pub mod key;
pub mod record;

pub use error::{LedgerError, RegistryError, RegistryResult};
pub use event::{LogAdded, LogDeleted, LOG_ADDED, LOG_DELETED};
pub use key::{composite_key, KEY_SEPARATOR};
pub use record::LogRecord;
