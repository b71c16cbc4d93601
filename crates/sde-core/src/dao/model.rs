//! DAO models and node property mapping.

use neo4rs::Row;
use serde::{Deserialize, Serialize};

/// Fields required to create a DAO.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaoCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A data access object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dao {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub queries: Vec<String>,
}

impl Dao {
    /// Map aliased node properties to a DAO; absent properties fall back
    /// to the field defaults.
    pub fn from_row(row: &Row) -> Self {
        Self {
            id: row.get("id").unwrap_or_default(),
            name: row.get("name").unwrap_or_default(),
            description: row.get("description").unwrap_or_default(),
            queries: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_shape_accepts_minimal_body() {
        let input: DaoCreate = serde_json::from_str(r#"{"name": "OrderDao"}"#).unwrap();
        assert_eq!(input.name, "OrderDao");
        assert_eq!(input.description, None);
    }

    #[test]
    fn full_shape_serializes_empty_queries() {
        let dao = Dao {
            id: "d1".to_string(),
            name: "OrderDao".to_string(),
            description: None,
            queries: Vec::new(),
        };
        let json = serde_json::to_value(&dao).unwrap();
        assert_eq!(json["description"], serde_json::Value::Null);
        assert_eq!(json["queries"], serde_json::json!([]));
    }
}
