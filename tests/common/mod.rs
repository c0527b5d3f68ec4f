//! Shared fixtures for the integration suites.

use seclog::prelude::*;

/// A valid record with the given identity and placeholder traffic fields.
pub fn record(log_id: &str, isp: &str) -> LogRecord {
    LogRecord {
        log_id: log_id.to_string(),
        isp: isp.to_string(),
        timestamp: "2024-12-01T12:00:00Z".to_string(),
        source_ip: "192.168.1.1".to_string(),
        destination_ip: "10.0.0.1".to_string(),
        source_port: 1234,
        destination_port: 80,
        protocol: "TCP".to_string(),
        event_type: "DDoS".to_string(),
        severity: "High".to_string(),
        message: "Suspicious traffic detected".to_string(),
    }
}

/// Registry over a fresh in-memory ledger, plus a handle sharing its state
/// so tests can inspect emitted events and raw keys.
pub fn registry() -> (LogRegistry<MemoryLedger>, MemoryLedger) {
    let ledger = MemoryLedger::new();
    (LogRegistry::new(ledger.clone()), ledger)
}
