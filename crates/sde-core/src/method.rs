//! Method models, nested under participants and classes.
//!
//! Methods are never stored as their own nodes by this core; they exist
//! only as elements of an owning entity's collection.

use serde::{Deserialize, Serialize};

fn default_return_type() -> String {
    "void".to_string()
}

/// Fields required to describe a method.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodCreate {
    pub name: String,
    #[serde(default)]
    pub logical_name: Option<String>,
    #[serde(default = "default_return_type")]
    pub return_type: String,
    #[serde(default)]
    pub parameters: Vec<serde_json::Value>,
}

/// A method with its server-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logical_name: Option<String>,
    #[serde(default = "default_return_type")]
    pub return_type: String,
    #[serde(default)]
    pub parameters: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_type_defaults_to_void() {
        let method: MethodCreate = serde_json::from_str(r#"{"name": "save"}"#).unwrap();
        assert_eq!(method.return_type, "void");
        assert_eq!(method.logical_name, None);
        assert!(method.parameters.is_empty());
    }

    #[test]
    fn wire_keys_are_camel_case() {
        let method = Method {
            id: "m1".to_string(),
            name: "save".to_string(),
            logical_name: Some("Save".to_string()),
            return_type: "void".to_string(),
            parameters: vec![],
        };
        let json = serde_json::to_value(&method).unwrap();
        assert_eq!(json["logicalName"], "Save");
        assert_eq!(json["returnType"], "void");
    }
}
