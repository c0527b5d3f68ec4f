//! The security-event log record
//!
//! [`LogRecord`] is the unit of storage: one record per observed security
//! event, addressed in the ledger by the composite key derived from its
//! `isp` and `log_id` fields.
//!
//! ## Wire Format
//!
//! Records are exchanged with the ledger as UTF-8 JSON objects with these
//! exact field names (ports are JSON numbers, everything else strings):
//!
//! ```json
//! {
//!   "logID": "log1",
//!   "isp": "ISP1",
//!   "timestamp": "2024-12-01T12:00:00Z",
//!   "source_ip": "192.168.1.1",
//!   "destination_ip": "10.0.0.1",
//!   "source_port": 1234,
//!   "destination_port": 80,
//!   "protocol": "TCP",
//!   "event_type": "DDoS",
//!   "severity": "High",
//!   "message": "Suspicious traffic detected"
//! }
//! ```

use serde::{Deserialize, Serialize};

/// A single security-event log entry.
///
/// All fields are mandatory on write. No field is validated beyond its
/// type: `timestamp` is expected to be ISO-8601 and the IP fields are
/// expected to be addresses, but the registry stores whatever it is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Identifier of the record, unique within its owning ISP.
    #[serde(rename = "logID")]
    pub log_id: String,
    /// Identifier of the ISP that owns the record.
    pub isp: String,
    /// When the event was observed (ISO-8601 expected, not enforced).
    pub timestamp: String,
    /// Source address of the offending traffic.
    pub source_ip: String,
    /// Destination address of the offending traffic.
    pub destination_ip: String,
    /// Source port.
    pub source_port: u16,
    /// Destination port.
    pub destination_port: u16,
    /// Transport or application protocol name.
    pub protocol: String,
    /// Classification of the event (e.g. "DDoS", "PortScan").
    pub event_type: String,
    /// Severity label (e.g. "Low", "Medium", "High", "Critical").
    pub severity: String,
    /// Free-text description.
    pub message: String,
}
