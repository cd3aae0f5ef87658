//! Wire model for the events endpoint.
//!
//! The endpoint returns a JSON array of delivery records, newest last. Each
//! record is a short source-defined label plus the raw webhook payload. The
//! payload is carried verbatim and never interpreted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One received webhook delivery.
///
/// Unknown fields in the wire objects are tolerated and dropped; `event` and
/// `payload` are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Event kind label, e.g. `push` or `pull_request`.
    pub event: String,
    /// Opaque structured payload. Any JSON value, including `null`.
    pub payload: Value,
}

impl EventRecord {
    /// Pretty-prints the payload with two-space indentation for display.
    pub fn payload_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.payload).unwrap_or_else(|_| self.payload.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_a_list_of_records() {
        let body = r#"[
            {"event": "push", "payload": {"ref": "refs/heads/main"}},
            {"event": "ping", "payload": null}
        ]"#;

        let records: Vec<EventRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].event, "push");
        assert_eq!(records[0].payload, json!({"ref": "refs/heads/main"}));
        assert_eq!(records[1].payload, Value::Null);
    }

    #[test]
    fn missing_payload_is_an_error() {
        let body = r#"[{"event": "push"}]"#;
        assert!(serde_json::from_str::<Vec<EventRecord>>(body).is_err());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let body = r#"[{"event": "ping", "payload": {}, "delivery_id": "abc123"}]"#;
        let records: Vec<EventRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(records[0].event, "ping");
    }

    #[test]
    fn payload_pretty_indents_nested_keys() {
        let record = EventRecord {
            event: "push".to_string(),
            payload: json!({"ref": "refs/heads/main"}),
        };

        let pretty = record.payload_pretty();
        assert!(pretty.lines().any(|line| line == r#"  "ref": "refs/heads/main""#));
    }

    #[test]
    fn payload_pretty_handles_scalars() {
        let record = EventRecord {
            event: "ping".to_string(),
            payload: Value::Null,
        };

        assert_eq!(record.payload_pretty(), "null");
    }
}
