//! Participant models and node property mapping.

use neo4rs::Row;
use serde::{Deserialize, Serialize};

use crate::method::Method;

/// Fields required to create a participant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantCreate {
    pub name: String,
    #[serde(default)]
    pub logical_name: Option<String>,
}

/// A sequence diagram participant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logical_name: Option<String>,
    #[serde(default)]
    pub methods: Vec<Method>,
}

impl Participant {
    /// Map aliased node properties to a participant.
    ///
    /// A property absent on the node falls back to the field's default;
    /// mapping never fails. Methods are not modeled as graph relationships,
    /// so the collection is always empty here.
    pub fn from_row(row: &Row) -> Self {
        Self {
            id: row.get("id").unwrap_or_default(),
            name: row.get("name").unwrap_or_default(),
            logical_name: row.get("logicalName").unwrap_or_default(),
            methods: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_shape_accepts_minimal_body() {
        let input: ParticipantCreate = serde_json::from_str(r#"{"name": "Alice"}"#).unwrap();
        assert_eq!(input.name, "Alice");
        assert_eq!(input.logical_name, None);
    }

    #[test]
    fn create_shape_rejects_missing_name() {
        let result: Result<ParticipantCreate, _> = serde_json::from_str(r#"{"logicalName": "User"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn full_shape_serializes_empty_methods() {
        let participant = Participant {
            id: "p1".to_string(),
            name: "Alice".to_string(),
            logical_name: Some("User".to_string()),
            methods: Vec::new(),
        };
        let json = serde_json::to_value(&participant).unwrap();
        assert_eq!(json["logicalName"], "User");
        assert_eq!(json["methods"], serde_json::json!([]));
    }
}
