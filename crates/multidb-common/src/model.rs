//! Wire-level record model shared by all storage backends

use serde::{Deserialize, Serialize};

/// Backend-assigned record identifier.
///
/// Relational backends assign auto-increment integers; the document backend
/// assigns ObjectIds surfaced as their hex form. Serialized untagged so a
/// relational record reads `{"id": 7, ...}` and a document record
/// `{"id": "65f0…", ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Serial(i64),
    Document(String),
}

/// A persisted user, as returned by every `list_all` and `save`.
///
/// The id is never caller-supplied; it exists only once the backend has
/// assigned it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: RecordId,
    pub name: String,
}

impl UserRecord {
    pub fn serial(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: RecordId::Serial(id),
            name: name.into(),
        }
    }

    pub fn document(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: RecordId::Document(id.into()),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_record_serialization() {
        let record = UserRecord::serial(42, "Alice");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":42,"name":"Alice"}"#);
    }

    #[test]
    fn test_document_record_serialization() {
        let record = UserRecord::document("65f0a1b2c3d4e5f6a7b8c9d0", "Bob");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":"65f0a1b2c3d4e5f6a7b8c9d0","name":"Bob"}"#);
    }

    #[test]
    fn test_record_roundtrip_keeps_id_variant() {
        let record = UserRecord::serial(1, "x");
        let json = serde_json::to_string(&record).unwrap();
        let back: UserRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, RecordId::Serial(1));
    }
}
