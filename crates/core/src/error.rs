//! Error taxonomy for the registry and the ledger boundary
//!
//! Two layers of failure exist:
//!
//! - [`LedgerError`]: what the external ledger can report through the narrow
//!   capability interface (transport failure, rejected query).
//! - [`RegistryError`]: what a registry operation can report to its caller.
//!   Ledger failures are wrapped with the name of the operation that hit
//!   them; guard failures carry the record identifier involved.
//!
//! Every operation propagates the first error it encounters. There are no
//! internal retries and no partial-success states.

use thiserror::Error;

/// Failure surfaced by the external ledger.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The ledger call failed at the transport or availability level.
    #[error("ledger transport failure: {0}")]
    Transport(String),

    /// The ledger rejected a range or rich query (malformed selector, or
    /// rich queries unsupported by the configured backend).
    #[error("query rejected by ledger: {0}")]
    QueryRejected(String),
}

/// Failure reported by a registry operation.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Create targeted a key that already holds a value.
    #[error("log '{log_id}' already exists")]
    AlreadyExists {
        /// Identifier of the offending record.
        log_id: String,
    },

    /// Read, update, or delete targeted a key with no stored value.
    #[error("log '{log_id}' not found")]
    NotFound {
        /// Identifier of the missing record.
        log_id: String,
    },

    /// A record or event payload failed to serialize.
    #[error("failed to encode {what}")]
    Encode {
        /// What was being serialized.
        what: &'static str,
        /// Underlying serializer error.
        #[source]
        source: serde_json::Error,
    },

    /// Stored bytes failed to deserialize into a record.
    #[error("failed to decode record at key '{key}'")]
    Decode {
        /// Ledger key holding the malformed value.
        key: String,
        /// Underlying deserializer error.
        #[source]
        source: serde_json::Error,
    },

    /// The ledger reported a transport/availability failure.
    #[error("ledger failure during {op}")]
    Backend {
        /// Registry operation that hit the failure.
        op: &'static str,
        /// The ledger's error.
        #[source]
        source: LedgerError,
    },

    /// The ledger rejected a range, rich, or history query.
    #[error("query failure during {op}")]
    Query {
        /// Registry operation that issued the query.
        op: &'static str,
        /// The ledger's error.
        #[source]
        source: LedgerError,
    },
}

impl RegistryError {
    /// Wrap a ledger failure hit by the named operation.
    pub fn backend(op: &'static str, source: LedgerError) -> Self {
        RegistryError::Backend { op, source }
    }

    /// Wrap a ledger query rejection hit by the named operation.
    pub fn query(op: &'static str, source: LedgerError) -> Self {
        RegistryError::Query { op, source }
    }
}

/// Convenience alias used throughout the registry.
pub type RegistryResult<T> = Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_exists_names_record() {
        let err = RegistryError::AlreadyExists {
            log_id: "log9".to_string(),
        };
        assert_eq!(err.to_string(), "log 'log9' already exists");
    }

    #[test]
    fn test_backend_wraps_ledger_error() {
        let err = RegistryError::backend("create", LedgerError::Transport("peer down".into()));
        assert_eq!(err.to_string(), "ledger failure during create");

        let source = std::error::Error::source(&err).expect("wrapped source");
        assert_eq!(source.to_string(), "ledger transport failure: peer down");
    }

    #[test]
    fn test_query_wraps_rejection() {
        let err = RegistryError::query(
            "by_severity",
            LedgerError::QueryRejected("rich queries unsupported".into()),
        );
        assert!(matches!(err, RegistryError::Query { op: "by_severity", .. }));
    }
}
