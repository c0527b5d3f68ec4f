//! Notification payloads
//!
//! A successful create or delete attaches a small named payload to the
//! enclosing ledger transaction for external subscribers. The payloads are
//! not persisted by the registry; their durability is whatever the
//! downstream listener provides.

use serde::{Deserialize, Serialize};

/// Event name attached to a successful create.
pub const LOG_ADDED: &str = "LogAdded";

/// Event name attached to a successful delete.
pub const LOG_DELETED: &str = "LogDeleted";

/// Payload of a [`LOG_ADDED`] notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogAdded {
    /// Identifier of the created record.
    #[serde(rename = "logID")]
    pub log_id: String,
    /// Owning ISP of the created record.
    pub isp: String,
    /// Timestamp carried by the created record.
    pub timestamp: String,
}

/// Payload of a [`LOG_DELETED`] notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogDeleted {
    /// Identifier of the deleted record.
    #[serde(rename = "logID")]
    pub log_id: String,
    /// Owning ISP of the deleted record.
    pub isp: String,
}
