//! Record CRUD operations
//!
//! Every operation derives the record's ledger key through
//! [`composite_key`] and enforces its lifecycle guard before touching the
//! ledger:
//!
//! | Operation | Guard | Event |
//! |-----------|-------|-------|
//! | `create` | fails `AlreadyExists` if the key is occupied | `LogAdded` |
//! | `read` | fails `NotFound` if the key is vacant | none |
//! | `update` | fails `NotFound` if the key is vacant | none |
//! | `delete` | fails `NotFound` if the key is vacant | `LogDeleted` |
//! | `seed` | none (bulk bootstrap) | none |

use crate::emit;
use crate::LogRegistry;
use seclog_core::{
    composite_key, LogAdded, LogDeleted, LogRecord, RegistryError, RegistryResult, LOG_ADDED,
    LOG_DELETED,
};
use seclog_ledger::Ledger;
use tracing::{debug, warn};

impl<L: Ledger> LogRegistry<L> {
    /// Whether a record is currently stored for `(log_id, isp)`.
    ///
    /// ## Errors
    ///
    /// - `Backend`: the ledger read failed
    pub fn exists(&self, log_id: &str, isp: &str) -> RegistryResult<bool> {
        let key = composite_key(isp, log_id);
        let value = self
            .ledger()
            .get(&key)
            .map_err(|e| RegistryError::backend("exists", e))?;
        Ok(value.is_some())
    }

    /// Store a new record and emit a `LogAdded` notification.
    ///
    /// ## Errors
    ///
    /// - `AlreadyExists`: the record's key already holds a value
    /// - `Encode`: the record or event payload failed to serialize
    /// - `Backend`: a ledger call failed. If the failure happens while
    ///   emitting the event, the preceding write stays in place; undoing it
    ///   is the ledger transaction's concern, not the registry's.
    pub fn create(&self, record: &LogRecord) -> RegistryResult<()> {
        if self.exists(&record.log_id, &record.isp)? {
            warn!(log_id = %record.log_id, isp = %record.isp, "create rejected, key occupied");
            return Err(RegistryError::AlreadyExists {
                log_id: record.log_id.clone(),
            });
        }

        let key = composite_key(&record.isp, &record.log_id);
        let bytes = encode_record(record)?;
        self.ledger()
            .put(&key, &bytes)
            .map_err(|e| RegistryError::backend("create", e))?;

        emit::emit(
            self.ledger(),
            LOG_ADDED,
            &LogAdded {
                log_id: record.log_id.clone(),
                isp: record.isp.clone(),
                timestamp: record.timestamp.clone(),
            },
        )?;

        debug!(key = %key, "record created");
        Ok(())
    }

    /// Fetch the record stored for `(log_id, isp)`.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no value is stored under the record's key
    /// - `Decode`: the stored bytes are not a valid record
    /// - `Backend`: the ledger read failed
    pub fn read(&self, log_id: &str, isp: &str) -> RegistryResult<LogRecord> {
        let key = composite_key(isp, log_id);
        let bytes = self
            .ledger()
            .get(&key)
            .map_err(|e| RegistryError::backend("read", e))?
            .ok_or_else(|| RegistryError::NotFound {
                log_id: log_id.to_string(),
            })?;
        decode_record(&key, &bytes)
    }

    /// Replace the stored record with `record`, whole-value. No event is
    /// emitted for updates.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: the record's key holds no value to replace
    /// - `Encode`: the record failed to serialize
    /// - `Backend`: a ledger call failed
    pub fn update(&self, record: &LogRecord) -> RegistryResult<()> {
        if !self.exists(&record.log_id, &record.isp)? {
            warn!(log_id = %record.log_id, isp = %record.isp, "update rejected, key vacant");
            return Err(RegistryError::NotFound {
                log_id: record.log_id.clone(),
            });
        }

        let key = composite_key(&record.isp, &record.log_id);
        let bytes = encode_record(record)?;
        self.ledger()
            .put(&key, &bytes)
            .map_err(|e| RegistryError::backend("update", e))?;

        debug!(key = %key, "record updated");
        Ok(())
    }

    /// Remove the record stored for `(log_id, isp)` and emit a `LogDeleted`
    /// notification. Prior versions stay readable through
    /// [`LogRegistry::history`].
    ///
    /// ## Errors
    ///
    /// - `NotFound`: the record's key holds no value
    /// - `Backend`: a ledger call failed
    pub fn delete(&self, log_id: &str, isp: &str) -> RegistryResult<()> {
        if !self.exists(log_id, isp)? {
            warn!(log_id = %log_id, isp = %isp, "delete rejected, key vacant");
            return Err(RegistryError::NotFound {
                log_id: log_id.to_string(),
            });
        }

        let key = composite_key(isp, log_id);
        self.ledger()
            .delete(&key)
            .map_err(|e| RegistryError::backend("delete", e))?;

        emit::emit(
            self.ledger(),
            LOG_DELETED,
            &LogDeleted {
                log_id: log_id.to_string(),
                isp: isp.to_string(),
            },
        )?;

        debug!(key = %key, "record deleted");
        Ok(())
    }

    /// Bulk-load `records` into a fresh ledger: unconditional writes, no
    /// existence checks, no events. Intended for bootstrapping; on a
    /// populated ledger it overwrites occupied keys.
    ///
    /// ## Errors
    ///
    /// - `Encode`: a record failed to serialize
    /// - `Backend`: a ledger write failed (records before it stay written)
    pub fn seed(&self, records: &[LogRecord]) -> RegistryResult<()> {
        for record in records {
            let key = composite_key(&record.isp, &record.log_id);
            let bytes = encode_record(record)?;
            self.ledger()
                .put(&key, &bytes)
                .map_err(|e| RegistryError::backend("seed", e))?;
        }
        debug!(count = records.len(), "ledger seeded");
        Ok(())
    }
}

fn encode_record(record: &LogRecord) -> RegistryResult<Vec<u8>> {
    serde_json::to_vec(record).map_err(|e| RegistryError::Encode {
        what: "log record",
        source: e,
    })
}

pub(crate) fn decode_record(key: &str, bytes: &[u8]) -> RegistryResult<LogRecord> {
    serde_json::from_slice(bytes).map_err(|e| RegistryError::Decode {
        key: key.to_string(),
        source: e,
    })
}
