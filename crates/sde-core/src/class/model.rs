//! Class models and node property mapping.

use neo4rs::Row;
use serde::{Deserialize, Serialize};

use crate::method::Method;

/// Fields required to create a class.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassCreate {
    pub name: String,
    #[serde(default)]
    pub stereotype: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub package_id: Option<String>,
}

/// A UML class.
///
/// `package_id` is a free-form reference to a package node's id; the store
/// layer does not check that the referenced node exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub stereotype: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub package_id: Option<String>,
    #[serde(default)]
    pub methods: Vec<Method>,
    #[serde(default)]
    pub attributes: Vec<String>,
}

impl Class {
    /// Map aliased node properties to a class; absent properties fall back
    /// to the field defaults.
    pub fn from_row(row: &Row) -> Self {
        Self {
            id: row.get("id").unwrap_or_default(),
            name: row.get("name").unwrap_or_default(),
            stereotype: row.get("stereotype").unwrap_or_default(),
            description: row.get("description").unwrap_or_default(),
            package_id: row.get("packageId").unwrap_or_default(),
            methods: Vec::new(),
            attributes: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_shape_accepts_minimal_body() {
        let input: ClassCreate = serde_json::from_str(r#"{"name": "OrderService"}"#).unwrap();
        assert_eq!(input.name, "OrderService");
        assert_eq!(input.stereotype, None);
        assert_eq!(input.package_id, None);
    }

    #[test]
    fn full_shape_serializes_defaults() {
        let class = Class {
            id: "c1".to_string(),
            name: "OrderService".to_string(),
            stereotype: None,
            description: None,
            package_id: None,
            methods: Vec::new(),
            attributes: Vec::new(),
        };
        let json = serde_json::to_value(&class).unwrap();
        assert_eq!(json["stereotype"], serde_json::Value::Null);
        assert_eq!(json["packageId"], serde_json::Value::Null);
        assert_eq!(json["methods"], serde_json::json!([]));
        assert_eq!(json["attributes"], serde_json::json!([]));
    }
}
