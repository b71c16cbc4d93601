//! Package models and node property mapping.

use neo4rs::Row;
use serde::{Deserialize, Serialize};

use crate::class::model::Class;

/// Fields required to create a package.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// A UML package.
///
/// `parent_id` is a free-form reference to another package node's id; the
/// store layer does not check that the referenced node exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub children: Vec<Package>,
    #[serde(default)]
    pub classes: Vec<Class>,
}

impl Package {
    /// Map aliased node properties to a package; absent properties fall
    /// back to the field defaults.
    pub fn from_row(row: &Row) -> Self {
        Self {
            id: row.get("id").unwrap_or_default(),
            name: row.get("name").unwrap_or_default(),
            description: row.get("description").unwrap_or_default(),
            parent_id: row.get("parentId").unwrap_or_default(),
            children: Vec::new(),
            classes: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_shape_accepts_minimal_body() {
        let input: PackageCreate = serde_json::from_str(r#"{"name": "Core"}"#).unwrap();
        assert_eq!(input.name, "Core");
        assert_eq!(input.description, None);
        assert_eq!(input.parent_id, None);
    }

    #[test]
    fn full_shape_serializes_nulls_and_empty_collections() {
        let package = Package {
            id: "p1".to_string(),
            name: "Core".to_string(),
            description: None,
            parent_id: None,
            children: Vec::new(),
            classes: Vec::new(),
        };
        let json = serde_json::to_value(&package).unwrap();
        assert_eq!(json["description"], serde_json::Value::Null);
        assert_eq!(json["parentId"], serde_json::Value::Null);
        assert_eq!(json["children"], serde_json::json!([]));
        assert_eq!(json["classes"], serde_json::json!([]));
    }
}
